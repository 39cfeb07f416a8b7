/// OBJ 模型加载示例
///
/// 读取配置（mesh_buffers.toml，可选），加载网格并打印上传 GPU 所需的缓冲区信息。
///
/// 运行方式：
/// ```
/// cargo run --example load_obj -- --mesh assets/cube.obj --log-level debug
/// ```

use anyhow::Context;
use mesh_buffers::core::{log, Config};
use mesh_buffers::geometry::Mesh;
use mesh_buffers::{app_info, app_warn};

fn main() -> anyhow::Result<()> {
    let mut config = Config::from_file_or_default("mesh_buffers.toml");
    config.apply_args(std::env::args());
    config.validate()?;

    let log_file = if config.logging.file_output {
        Some(config.logging.log_file.as_str())
    } else {
        None
    };
    log::init_logger(config.logging.level, config.logging.file_output, log_file);

    app_info!(path = %config.mesh.path, "正在加载网格");

    let mesh = Mesh::from_obj_file(&config.mesh.path)
        .with_context(|| format!("加载 {} 失败", config.mesh.path))?;

    if mesh.num_indices() == 0 {
        app_warn!("网格不包含任何三角形");
    }

    println!("网格信息:");
    println!("  顶点数: {} ({} 字节)", mesh.num_vertices(), mesh.num_vertex_bytes());
    println!("  法线数: {} ({} 字节)", mesh.num_normals(), mesh.num_normal_bytes());
    println!("  索引数: {} ({} 字节)", mesh.num_indices(), mesh.num_index_bytes());

    let vertices = mesh.vertex_buffer();
    let normals = mesh.normal_buffer();
    println!("\n顶点数据（前 {} 个）:", mesh.num_vertices().min(3));
    for i in 0..mesh.num_vertices().min(3) {
        let p = &vertices[i * 3..i * 3 + 3];
        let n = &normals[i * 3..i * 3 + 3];
        println!(
            "  顶点 {}: 位置 [{:.3}, {:.3}, {:.3}]  法线 [{:.3}, {:.3}, {:.3}]",
            i, p[0], p[1], p[2], n[0], n[1], n[2]
        );
    }

    println!("\n索引数据（前 {} 个三角形）:", (mesh.num_indices() / 3).min(3));
    for (i, triangle) in mesh.index_buffer().chunks_exact(3).take(3).enumerate() {
        println!("  三角形 {}: {:?}", i, triangle);
    }

    Ok(())
}
