//! Examples of using the prefix set
use prefix_set::PrefixSet;

fn main() {
    // Create a new set
    let mut set = PrefixSet::new();

    // Add some members
    for word in &["", "hello", "h", "he", "hee", "world", "www"] {
        set.add(word);
    }

    // Check membership
    assert!(set.contains("hello"));
    assert!(!set.contains("hel"));
    assert!(set.contains(""));

    // Members always come back sorted
    println!("{}", set);

    // Or seed the set from any iterator of strings
    let set: PrefixSet = std::env::args().skip(1).collect();
    for member in &set {
        println!("{:?}", member);
    }

    // Look at everything below a prefix
    let view = set.view_prefix("he");
    println!("{} member(s) start with {:?}", view.len(), view.prefix());
}
