//! Route three kinds of unit across the same map.
//!
//! Run: cargo run --bin corridor
//! With search logs: RUST_LOG=gridnav_paths=debug cargo run --bin corridor

use gridnav_core::Point;
use gridnav_demos::{LAND, WATER, parse_map, render};
use gridnav_paths::{AStar, SearchConfig, Unit, path_cost};

const MAP: &str = "
..........#.........
..........#.........
....####..#..~~~~...
....#.....,..~~~~...
....#.....#..~~~~...
....#######==~~~~...
..............~~~...
..............~~~...
";

fn main() {
    env_logger::init();

    let grid = match parse_map(MAP) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let start = Point::new(1, 1);
    let finish = Point::new(18, 1);
    let astar = AStar::new(SearchConfig::new().with_max_expansions(grid.len()));

    let units = [
        ("scout (size 1, land)", Unit::new(1, LAND)),
        ("cart (size 2, land)", Unit::new(2, LAND)),
        ("amphibian (size 2, land+water)", Unit::new(2, LAND | WATER)),
    ];

    for (name, unit) in units {
        println!("{name}:");
        match astar.find_path(&grid, start, finish, unit) {
            Ok(Some(path)) => {
                let mut full = path.clone();
                full.push(grid.index(finish));
                let cost = path_cost(&grid, &full).unwrap_or(f32::NAN);
                println!("{}{} steps, cost {cost:.1}\n", render(&grid, &path, finish), path.len());
            }
            Ok(None) => println!("no route\n"),
            Err(e) => log::error!("search failed: {e}"),
        }
    }
}
