//! # Cursor I/O
//!
//! Copy helpers with file-position semantics. Both take the caller's cursor,
//! copy what fits, and advance the cursor by exactly the number of bytes
//! copied.

/// Copy from `src` (the logical content) into `dst`, starting at `*pos`.
///
/// Returns 0 without touching the cursor when `dst` is empty or the cursor
/// is at or past the end of `src`.
pub fn read_from_buffer(dst: &mut [u8], pos: &mut u64, src: &[u8]) -> usize {
    let start = match usize::try_from(*pos) {
        Ok(start) if start < src.len() => start,
        _ => return 0,
    };
    if dst.is_empty() {
        return 0;
    }

    let count = dst.len().min(src.len() - start);
    dst[..count].copy_from_slice(&src[start..start + count]);
    *pos += count as u64;
    count
}

/// Copy `src` into `dst` starting at `*pos`, bounded by `dst.len()`.
///
/// Bytes that would land past the end of `dst` are dropped. Returns 0
/// without touching the cursor when `src` is empty or the cursor is at or
/// past the end of `dst`.
pub fn write_to_buffer(dst: &mut [u8], pos: &mut u64, src: &[u8]) -> usize {
    let start = match usize::try_from(*pos) {
        Ok(start) if start < dst.len() => start,
        _ => return 0,
    };
    if src.is_empty() {
        return 0;
    }

    let count = src.len().min(dst.len() - start);
    dst[start..start + count].copy_from_slice(&src[..count]);
    *pos += count as u64;
    count
}
