use chrono::TimeDelta;
use pg_interval::Interval;

fn main() {
    let rental = Interval::parse("1 year 2 mons 3 days 04:05:06.789");
    let iso = Interval::parse("P1Y2M3DT4H5M6.789S");
    let late_fee = Interval::parse("-P1D");

    println!("verbose: {rental}");
    println!("iso:     {iso} (equal: {})", rental == iso);
    println!("fields:  {:?}", rental.snapshot());
    println!("sum:     {}", rental + late_fee);
    println!("doubled: {}", rental * 2.0);

    match "3 dyas".parse::<Interval>() {
        Ok(v) => println!("strict:  {v}"),
        Err(e) => println!("strict:  {e}"),
    }

    match TimeDelta::try_from(Interval::parse("36 hours")) {
        Ok(delta) => println!("chrono:  {} s", delta.num_seconds()),
        Err(e) => println!("chrono:  {e}"),
    }
}
