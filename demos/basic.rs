use ascii_bintree::{Node, Plain, RenderError, TreePrinter, render};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), RenderError> {
    // RUST_LOG=ascii_bintree=trace shows layout and per-row events
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    println!("=== Basic Usage Examples ===\n");

    // Example 1: Single node
    println!("1. Single Node:");
    print!("{}", render(Some(&Node::new(5)), &Plain)?);
    println!();

    // Example 2: Both children
    println!("2. Parent With Two Children:");
    let tree = Node::new(5).with_left(Node::new(2)).with_right(Node::new(10));
    print!("{}", render(Some(&tree), &Plain)?);
    println!();

    // Example 3: Deeper tree straight to stdout
    println!("3. Search Tree:");
    let tree = Node::new(5).with_left(Node::new(2)).with_right(
        Node::new(10).with_left(Node::new(5)).with_right(
            Node::new(20).with_left(
                Node::new(17)
                    .with_left(Node::new(12))
                    .with_right(Node::new(19)),
            ),
        ),
    );
    TreePrinter::new(Plain).print(Some(&tree))?;
    println!();

    // Example 4: Left-leaning chain
    println!("4. Left Chain:");
    let chain = Node::new('a').with_left(Node::new('b').with_left(Node::new('c')));
    print!("{}", render(Some(&chain), &Plain)?);

    Ok(())
}
