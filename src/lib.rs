//! mesh_buffers - 最小化的 OBJ 网格加载库
//!
//! 读取 Wavefront 风格的文本几何描述（`v` 顶点和 `f` 三角形面），
//! 生成可直接上传到 GPU 的扁平顶点、法线和索引缓冲区。
//!
//! # 模块结构
//!
//! - `core`: 核心功能模块（日志、配置、错误处理）
//! - `geometry`: 网格加载模块（OBJ 解析器、`Mesh` 缓冲区）
//! - `math`: 数学工具（nalgebra 类型别名、三角函数、法线计算）
//!
//! # 使用示例
//!
//! ```no_run
//! use mesh_buffers::geometry::Mesh;
//!
//! let mesh = Mesh::from_obj_file("assets/triangle.obj")?;
//!
//! println!("顶点数: {}", mesh.num_vertices());
//! println!("顶点缓冲区字节数: {}", mesh.num_vertex_bytes());
//! # Ok::<(), mesh_buffers::core::MeshBuffersError>(())
//! ```

pub mod core;
pub mod geometry;
pub mod math;
