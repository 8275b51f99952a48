//! # huffpress
//!
//! A lossless file compressor built on canonical Huffman coding over
//! single-byte symbols in the 0-127 range.
//!
//! The compressed artifact is self-contained: a textual frequency header,
//! a sentinel line, a decimal padding count, then the bit-packed payload.
//! Decompression rebuilds the exact coding tree from the header alone.
//!
//! ## Quick start
//!
//! ```rust
//! let packed = huffpress::encode(b"abracadabra")?;
//! let restored = huffpress::decode(&packed)?;
//! assert_eq!(restored, b"abracadabra");
//! # Ok::<(), huffpress::HuffError>(())
//! ```

pub mod bits;
pub mod codec;
pub mod error;
pub mod freq;
pub mod header;
pub mod logger;
pub mod tree;
pub mod utils;

pub use codec::{compress_file, decode, decompress_file, encode};
pub use error::HuffError;
pub use freq::FrequencyTable;
