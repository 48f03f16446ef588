//! Build a HIML tree programmatically and write it out.
//!
//! Run with: `cargo run --example build_and_write`

use himl::{FormatOptions, Object};

fn main() {
    let mut database = Object::with_name("database");
    database.set("host", "db.internal");
    database.set("port", 5432);
    database.set("motd", "say \"hello\"");

    let mut replicas = Object::with_name("replicas");
    replicas.add("replica_a");
    replicas.add("replica_b");

    let mut root = Object::new();
    root.set("version", 3);
    root.add(database);
    root.add(replicas);

    println!("--- default (4-space indent) ---");
    print!("{}", himl::to_string(&root));

    println!("--- 2-space indent ---");
    print!(
        "{}",
        himl::to_string_with_options(&root, FormatOptions::new().with_indent(2))
    );
}
