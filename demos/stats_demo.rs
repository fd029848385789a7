use std::hash::BuildHasherDefault;
use std::hash::DefaultHasher;

use clap::Parser;
use robin_hood_map::RobinHoodMap;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short = 'n', long = "entries", default_value_t = 1000)]
    entries: u64,

    /// Fraction of the entries to remove again after filling.
    #[arg(short = 'r', long = "remove_fraction", default_value_t = 0.0)]
    remove_fraction: f64,
}

type DemoMap = RobinHoodMap<u64, u64, BuildHasherDefault<DefaultHasher>>;

fn main() {
    let args = Args::parse();

    println!("Filling map with {} u64 keys...", args.entries);

    let mut map = DemoMap::default();
    let mut growths = 0;
    for key in 0..args.entries {
        let before = map.capacity();
        if !map.insert(key, key * 2) {
            panic!("Key already exists in map: {}", key);
        }
        if map.capacity() != before {
            growths += 1;
        }
    }

    println!(
        "Inserted {} entries, capacity {} after {} growths",
        map.len(),
        map.capacity(),
        growths
    );
    println!(
        "Load factor: {:.2}%",
        (map.len() as f64 / map.capacity() as f64) * 100.0
    );

    let to_remove = (args.entries as f64 * args.remove_fraction.clamp(0.0, 1.0)) as u64;
    if to_remove > 0 {
        let mut shrinks = 0;
        for key in 0..to_remove {
            let before = map.capacity();
            map.remove(&key);
            if map.capacity() != before {
                shrinks += 1;
            }
        }
        println!(
            "Removed {} entries, capacity {} after {} shrinks",
            to_remove,
            map.capacity(),
            shrinks
        );
    }

    map.probe_histogram().print();
    map.table_stats().print();
}
