use clap::{Parser, ValueEnum};
use learn_rust_tree::logging::setup_logging;
use learn_rust_tree::{Tree, TreeOps};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;
use tracing::info;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Shape {
    /// every node is a child of the root
    Wide,
    /// every node is a child of the previous one
    Deep,
    /// every node is a child of a random earlier node
    Random,
}

#[derive(Parser)]
#[command(name = "tree-benchmark")]
#[command(about = "A tree performance testing tool")]
struct Args {
    #[arg(long, default_value = "10000")]
    size: usize,

    #[arg(long, value_enum, default_value = "random")]
    shape: Shape,

    #[arg(long, default_value = "42")]
    seed: u64,

    /// Raise log verbosity, repeat for more
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,
}

fn fill<Tr: TreeOps<usize>>(tree: &mut Tr, size: usize, shape: Shape, rng: &mut StdRng) {
    for i in 1..size {
        assert_eq!(tree.len(), i);
        let parent = match shape {
            Shape::Wide => 0,
            Shape::Deep => i - 1,
            Shape::Random => rng.random_range(0..i),
        };
        assert!(tree.add_child(&parent, i));
    }
}

fn main() {
    let args = Args::parse();
    setup_logging(args.debug);

    println!(
        "Running with {:?} tree shape and {} node count",
        args.shape, args.size
    );

    let size = args.size.max(1);
    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut tree = Tree::new(0usize);

    let start = Instant::now();
    fill(&mut tree, size, args.shape, &mut rng);
    let inserted = Instant::now();
    info!(len = tree.len(), "tree built");

    for i in 0..size {
        assert!(tree.contains(&i));
    }
    let checked_contains = Instant::now();

    assert_eq!(tree.traverse_dfs().len(), size);
    let dfs_done = Instant::now();

    assert_eq!(tree.traverse_bfs().len(), size);
    let bfs_done = Instant::now();

    let height = tree.height();
    let end = Instant::now();
    info!(height, "height computed");

    println!(
        "Inserts took {} seconds",
        inserted.saturating_duration_since(start).as_secs_f32()
    );
    println!(
        "Checking contains took {} seconds",
        checked_contains
            .saturating_duration_since(inserted)
            .as_secs_f32()
    );
    println!(
        "DFS took {} seconds",
        dfs_done
            .saturating_duration_since(checked_contains)
            .as_secs_f32()
    );
    println!(
        "BFS took {} seconds",
        bfs_done.saturating_duration_since(dfs_done).as_secs_f32()
    );
    println!(
        "Height {} took {} seconds",
        height,
        end.saturating_duration_since(bfs_done).as_secs_f32()
    );
    println!(
        "Total {} seconds",
        end.saturating_duration_since(start).as_secs_f32()
    );
}
