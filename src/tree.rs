pub trait TreeOps<T> {
    fn add_child(&mut self, parent: &T, child: T) -> bool;
    fn contains(&self, value: &T) -> bool;
    fn height(&self) -> usize;
    fn len(&self) -> usize;
}
