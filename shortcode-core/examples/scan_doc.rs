use shortcode_core::{scan, AttrValue, Inline};

fn main() {
    let input = "intro text\n{{< youtube id=\"abc123\" autoplay >}}\n{{< not quite\noutro\n";

    println!("Input: {input:?}\n");
    println!("Items:");

    for item in scan(input) {
        match item {
            Inline::Text(text) => println!("  Text: {text:?}"),
            Inline::Shortcode(node) => {
                println!("  Shortcode: {}", node.name);
                for attr in &node.attributes {
                    match &attr.value {
                        None => println!("    {} (flag)", attr.name),
                        Some(AttrValue::Bare(v)) => println!("    {} = {v}", attr.name),
                        Some(AttrValue::Quoted(v)) => println!("    {} = {v:?}", attr.name),
                    }
                }
            }
        }
    }
}
