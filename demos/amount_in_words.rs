use bijak::words::*;
use rust_decimal_macros::dec;

fn main() {
    let indian = AmountWords::new(
        NumberingSystem::indian(),
        CurrencyWords::rupees().with_suffix("Only"),
    )
    .expect("two minor digits are supported");
    let western = AmountWords::western(
        CurrencyWords::new("Dollars", "Cents").with_singular("Dollar", "Cent"),
    )
    .expect("two minor digits are supported");

    for amount in [dec!(1), dec!(100), dec!(1250.50), dec!(100000), dec!(12345678.9)] {
        println!("{amount}");
        println!("  {}", indian.to_words(amount).unwrap());
        println!("  {}", western.to_words(amount).unwrap());
    }

    // Custom tiers: the smallest must be one thousand.
    let myriad = NumberingSystem::new([Tier::new(1_000, "Thousand"), Tier::new(10_000, "Myriad")])
        .expect("valid tier table");
    println!("{}", myriad.integer_to_words(250_000));

    match indian.to_words(dec!(-5)) {
        Ok(words) => println!("{words}"),
        Err(e) => println!("rejected: {e}"),
    }
}
