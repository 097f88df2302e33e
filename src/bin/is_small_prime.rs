use vecmap::predicate::{BoolConstant, IsSmallPrime};

fn main() {
    env_logger::init();

    println!("{}", u8::from(IsSmallPrime::<1>::VALUE));
    println!("{}", u8::from(IsSmallPrime::<2>::VALUE));
}
