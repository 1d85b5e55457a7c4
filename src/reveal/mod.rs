pub mod entrance;
pub mod typewriter;
