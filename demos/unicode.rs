use ascii_bintree::{Glyphs, Node, Plain, RenderConfig, TreePrinter};

fn main() -> Result<(), ascii_bintree::RenderError> {
    let tree = Node::new("Amy")
        .with_left(
            Node::new("Bob")
                .with_left(Node::new("David"))
                .with_right(Node::new("Edison")),
        )
        .with_right(Node::new("Carl").with_right(Node::new("George")));

    println!("ASCII:");
    TreePrinter::new(Plain).print(Some(&tree))?;

    println!("\nBox drawing:");
    TreePrinter::new(Plain)
        .with_config(RenderConfig::default().with_glyphs(Glyphs::UNICODE))
        .print(Some(&tree))?;

    println!("\nSquare brackets, wide labels:");
    let glyphs = Glyphs {
        left_bracket: '[',
        right_bracket: ']',
        ..Glyphs::UNICODE
    };
    let cities = Node::new("東京").with_left(Node::new("大阪")).with_right(Node::new("札幌"));
    TreePrinter::new(Plain)
        .with_config(RenderConfig::default().with_glyphs(glyphs))
        .print(Some(&cities))?;
    Ok(())
}
