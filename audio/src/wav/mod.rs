//! RIFF/WAVE container encoding.
//!
//! Samples are written as a canonical 44-byte header followed by 16-bit
//! little-endian mono PCM:
//!
//! | Offset | Size | Field | Value |
//! |---|---|---|---|
//! | 0 | 4 | ChunkID | `"RIFF"` |
//! | 4 | 4 | ChunkSize | `36 + data_size` |
//! | 8 | 4 | Format | `"WAVE"` |
//! | 12 | 4 | Subchunk1ID | `"fmt "` |
//! | 16 | 4 | Subchunk1Size | `16` |
//! | 20 | 2 | AudioFormat | `1` (linear PCM) |
//! | 22 | 2 | NumChannels | `1` |
//! | 24 | 4 | SampleRate | sample rate |
//! | 28 | 4 | ByteRate | `sample_rate * 2` |
//! | 32 | 2 | BlockAlign | `2` |
//! | 34 | 2 | BitsPerSample | `16` |
//! | 36 | 4 | Subchunk2ID | `"data"` |
//! | 40 | 4 | Subchunk2Size | `data_size = 2 * samples` |
//!
//! Encoding never fails. Out-of-range samples are clamped and `NaN` becomes
//! silence, see [`quantize`].

mod container;
mod header;
mod quantize;

pub use container::{WAV_FILENAME, WavContainer, encode};
pub use header::{HEADER_LEN, WavHeader};
pub use quantize::{dequantize, quantize};
