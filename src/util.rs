/// Reads `N` little-endian `u32`s from the start of `bytes`.
///
/// Returns `None` if `bytes` is too short.
pub(crate) fn read_u32_le_array<const N: usize>(bytes: &[u8]) -> Option<[u32; N]> {
    let bytes = bytes.get(..N * 4)?;

    let mut buffer = [0_u32; N];
    bytemuck::cast_slice_mut::<u32, u8>(buffer.as_mut_slice()).copy_from_slice(bytes);
    for i in buffer.iter_mut() {
        *i = u32::from_le(*i);
    }
    Some(buffer)
}
