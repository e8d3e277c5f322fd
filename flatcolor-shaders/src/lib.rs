#![cfg_attr(target_arch = "spirv", no_std)]
#![allow(unexpected_cfgs)]

use spirv_std::glam::{Mat4, Vec3, Vec4};
use spirv_std::spirv;

pub use spirv_std::glam;


/// Per-draw transform state, pushed as a vertex-stage push constant.
#[derive(Copy, Clone, PartialEq)]
#[cfg_attr(not(target_arch = "spirv"), derive(Debug))]
#[repr(C)]
pub struct DrawConstants {
    pub model: Mat4,
    pub view_projection: Mat4,
}

impl DrawConstants {
    pub const IDENTITY: Self = Self {
        model: Mat4::IDENTITY,
        view_projection: Mat4::IDENTITY,
    };

    /// Transform used when the host already folded view and projection into `model`.
    pub const fn from_model(model: Mat4) -> Self {
        Self {
            model,
            view_projection: Mat4::IDENTITY,
        }
    }

    pub fn local_to_clip(&self) -> Mat4 {
        self.view_projection * self.model
    }
}

/// What the vertex stage hands to the rasterizer.
#[derive(Copy, Clone, PartialEq)]
#[cfg_attr(not(target_arch = "spirv"), derive(Debug))]
pub struct VertexOutput {
    pub clip_position: Vec4,
    pub color: Vec4,
}

/// Local positions are points, so w is always 1.
pub fn homogeneous(position: Vec3) -> Vec4 {
    position.extend(1.0)
}

pub fn vertex(constants: &DrawConstants, position: Vec3, color: Vec4) -> VertexOutput {
    let world = constants.model * homogeneous(position);

    VertexOutput {
        clip_position: constants.view_projection * world,
        color,
    }
}

pub fn fragment(color: Vec4) -> Vec4 {
    color
}

#[spirv(vertex)]
pub fn main_vs(
    #[spirv(push_constant)] constants: &DrawConstants,
    in_position: Vec3,
    in_color: Vec4,
    #[spirv(position)] out_position: &mut Vec4,
    out_color: &mut Vec4,
) {
    let output = vertex(constants, in_position, in_color);
    *out_position = output.clip_position;
    *out_color = output.color;
}

#[spirv(fragment)]
pub fn main_fs(in_color: Vec4, output: &mut Vec4) {
    *output = fragment(in_color);
}
