use lattice::components::find_components;
use lattice::matrix::{intercommunity_matrix, modularity, modularity_matrix};
use lattice::random::random_graph;
use rand::{rngs::StdRng, SeedableRng};

fn main() {
    const K: usize = 8;

    // Draw a random topology; reseeding the generator reproduces the run.
    let mut rng = StdRng::seed_from_u64(4);
    let adjacency = random_graph(K, &mut rng);

    println!("Generated a {K}-node graph, adjacency matrix: {adjacency}");

    let components = find_components(&adjacency, None).expect("matrix is square");
    println!("Connected components: {components:?}");

    // Split the node range down the middle and score the split.
    let communities = vec![(0..K / 2).collect::<Vec<_>>(), (K / 2..K).collect()];

    let mod_matrix = modularity_matrix(&adjacency).expect("graph has edges");
    let score = modularity(&mod_matrix, &communities).expect("split is in range");
    println!("\nUnnormalized modularity of an even split: {score:.3}");

    let collapsed = intercommunity_matrix(&adjacency, &communities).expect("split is in range");
    println!("\nCommunity-level adjacency matrix: {collapsed}");
}
