use densegraph::{
    cluster::tree_cut,
    edge::Edge,
    graph::Graph,
    transform::hessenberg,
};
use tracing_subscriber::EnvFilter;

fn main() {
    // `RUST_LOG=densegraph=trace` shows every merge and PageRank round.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("densegraph=debug")),
        )
        .init();

    // Two weighted triangles bridged by a single long edge.
    let edges = [
        Edge::weighted(0, 1, 1.0),
        Edge::weighted(1, 2, 1.0),
        Edge::weighted(0, 2, 2.0),
        Edge::weighted(2, 3, 4.0),
        Edge::weighted(3, 4, 1.0),
        Edge::weighted(4, 5, 1.0),
        Edge::weighted(3, 5, 2.0),
    ];
    let mut graph = Graph::from_edges(6, &edges).unwrap();

    println!("adjacency:{}", graph.adjacency_matrix());
    println!("laplacian:{}", graph.laplacian_matrix());
    println!("distances:{}", graph.distance_matrix());
    println!("hessenberg mask:{}", hessenberg(graph.adjacency_matrix()).unwrap());

    println!("{}\n", graph.summary().unwrap());

    let path = graph.shortest_path(0, 5).unwrap().unwrap();
    println!("shortest path 0 -> 5: {:?} ({})", path.vertices, path.distance);
    println!("longest path 0 -> 5: {:?}", graph.longest_path(0, 5).unwrap());

    let tree = graph.minimum_spanning_tree().unwrap();
    let weight: f64 = tree.iter().map(Edge::weight).sum();
    println!("spanning tree: {} edges, total weight {weight}", tree.len());

    let clusters = graph.clusters(2).unwrap();
    for cluster in &clusters {
        println!("cluster {:?} formed at {}", cluster.points(), cluster.distance());
    }
    println!("tree cut: {:?}", tree_cut(&clusters, 2));
}
