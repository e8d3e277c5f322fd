use spirv_builder::SpirvBuilder;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Exposes the compiled module to the host as `env!("flatcolor_shaders.spv")`
    let mut builder = SpirvBuilder::new("flatcolor-shaders", "spirv-unknown-vulkan1.2");
    builder.build_script.dependency_info = Some(true);
    builder.build_script.env_shader_spv_path = Some(true);
    builder.build()?;

    Ok(())
}
