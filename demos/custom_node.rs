use ascii_bintree::{Debugged, RenderConfig, Template, TreePrinter, format::from_fn, impl_binary_node};
use std::fmt::Write;
use std::rc::Rc;

/// A node type the crate knows nothing about.
struct Task {
    name: String,
    before: Option<Rc<Task>>,
    after: Option<Rc<Task>>,
}

impl_binary_node!(Task, name: String, before, after);

fn task(name: &str, before: Option<Task>, after: Option<Task>) -> Task {
    Task {
        name: name.to_string(),
        before: before.map(Rc::new),
        after: after.map(Rc::new),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let plan = task(
        "build",
        Some(task("fetch", None, Some(task("verify", None, None)))),
        Some(task("test", Some(task("lint", None, None)), None)),
    );

    println!("Names through a template:");
    TreePrinter::new(Template::parse("<{}>")?).print(Some(&plan))?;
    println!();

    println!("Debug formatting:");
    TreePrinter::new(Debugged).print(Some(&plan))?;
    println!();

    println!("Closure formatter reading the label:");
    let shouting = from_fn(|name: &String, out: &mut String| write!(out, "{}", name.to_uppercase()));
    TreePrinter::new(shouting).print(Some(&plan))?;
    println!();

    println!("Label ceiling of 4 columns:");
    let strict = TreePrinter::new(Debugged)
        .with_config(RenderConfig::default().with_max_label_width(Some(4)));
    match strict.print(Some(&plan)) {
        Ok(()) => println!("rendered"),
        Err(err) => println!("error: {err}"),
    }
    Ok(())
}
