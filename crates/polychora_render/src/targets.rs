//! Off-screen render targets
//!
//! The frame renders into a main off-screen color+depth pair, optionally
//! through the holographic target, before the composite pass writes to the
//! swapchain. Resize recreates all of them at the new resolution before the
//! next frame renders; sampling a stale-sized target is a correctness bug.

/// The off-screen textures for one frame
pub struct RenderTargets {
    pub scene_color: wgpu::TextureView,
    pub scene_depth: wgpu::TextureView,
    pub holo_color: wgpu::TextureView,
    size: (u32, u32),
}

impl RenderTargets {
    pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

    pub fn new(
        device: &wgpu::Device,
        width: u32,
        height: u32,
        color_format: wgpu::TextureFormat,
    ) -> Self {
        let width = width.max(1);
        let height = height.max(1);

        let color_descriptor = |label| wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: color_format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        };

        let scene_color = device
            .create_texture(&color_descriptor("Scene Color Target"))
            .create_view(&wgpu::TextureViewDescriptor::default());
        let holo_color = device
            .create_texture(&color_descriptor("Holographic Color Target"))
            .create_view(&wgpu::TextureViewDescriptor::default());

        let scene_depth = device
            .create_texture(&wgpu::TextureDescriptor {
                label: Some("Scene Depth Target"),
                size: wgpu::Extent3d {
                    width,
                    height,
                    depth_or_array_layers: 1,
                },
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: Self::DEPTH_FORMAT,
                usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
                view_formats: &[],
            })
            .create_view(&wgpu::TextureViewDescriptor::default());

        Self {
            scene_color,
            scene_depth,
            holo_color,
            size: (width, height),
        }
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        self.size
    }
}
