pub mod idea_graph;
