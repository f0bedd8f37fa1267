#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Width(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Height(pub usize);

/// Grid distance used by a neighbour query.
/// Stride 2 jumps over the wall between two lattice cells, stride 1 is plain adjacency.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Stride(pub usize);

#[derive(Eq, PartialEq, Copy, Clone, Debug, Default)]
pub struct TickIndex(pub usize);
