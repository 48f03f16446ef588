//! Parse a HIML document and walk the resulting tree.
//!
//! Run with: `cargo run --example parse_tree`

use himl::Value;

const SOURCE: &str = r#"
// application config, no outer braces needed
title = "demo app"
retries = 3

server {
    host = localhost
    port = 8080
}

colors { red, green, blue }
"#;

fn main() {
    let root = match himl::from_str(SOURCE) {
        Ok(root) => root,
        Err(err) => {
            eprintln!("parse failed: {err}");
            std::process::exit(1);
        }
    };

    println!("title   = {:?}", root.get("title").and_then(Value::as_str));
    println!("retries = {}", root.get("retries").map_or(0, Value::to_i64));

    for child in root.children() {
        if let Value::Object(obj) = child {
            println!("block {:?}: {} attrs, {} children",
                obj.name(),
                obj.attribute_count(),
                obj.child_count(),
            );
        }
    }

    println!("--- normalized ---");
    print!("{}", himl::to_string(&root));
}
