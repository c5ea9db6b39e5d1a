use clap::Parser;
use learn_rust_tree::Tree;
use learn_rust_tree::logging::setup_logging;

#[derive(Parser)]
#[command(name = "tree-demo")]
#[command(about = "Builds a small sample tree and prints its traversals")]
struct Args {
    /// Raise log verbosity, repeat for more
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,
}

fn main() {
    let args = Args::parse();
    setup_logging(args.debug);

    let mut tree = Tree::new(1);
    for (parent, child) in [(1, 2), (1, 3), (2, 4), (2, 5), (3, 6), (3, 7)] {
        if !tree.add_child(&parent, child) {
            eprintln!("No node {parent} to attach {child} to");
        }
    }

    println!("DFS Traversal: {:?}", tree.traverse_dfs());
    println!("BFS Traversal: {:?}", tree.traverse_bfs());
    println!("Tree Height: {}", tree.height());
    println!("Contains 5: {}", tree.contains(&5));
    println!("Contains 10: {}", tree.contains(&10));
    println!("All Values in Tree: {:?}", tree.all_values());
}
