//! Calls the singleton accessor twice and reports whether both calls
//! returned the same instance.

fn main() {
    creational::logging::init(0);
    println!("{}", creational::demo::singleton_verdict());
}
