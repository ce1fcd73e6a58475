pub mod buffer;

// re-export for cleaner imports
pub use self::buffer::OutputBuffer;
