use vecmap::VecMap;

fn main() {
    env_logger::init();

    let mut map = VecMap::new();
    map.insert(1, 'c');
    *map.get_or_insert_default(1) = 'e';
    *map.get_or_insert_default(10) = 'g';

    println!("{}", map.get(&1).copied().unwrap_or_default());
    println!("{}", map.get(&10).copied().unwrap_or_default());

    match map.try_get_mut(&2) {
        Ok(value) => println!("{value}"),
        Err(error) => log::error!("lookup of key 2 failed: {error}"),
    }
}
