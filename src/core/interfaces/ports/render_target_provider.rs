pub trait RenderTargetProvider: Send + Sync {
    /// Finished color buffer of the final render target, bottom row first,
    /// four bytes per pixel. `None` when the frame has no data yet.
    fn color_buffer_raw_data(&self) -> Option<&[u8]>;
    fn width(&self) -> u32;
    fn height(&self) -> u32;
}
