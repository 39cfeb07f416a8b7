/// OBJ 文件加载器
///
/// 只识别两种记录：
///
/// | 前缀 | 字段 | 含义 |
/// |---|---|---|
/// | `v ` | 3 个浮点数 | 顶点位置 x y z |
/// | `f ` | 3 个整数（从 1 开始） | 三角形面的顶点索引 |
///
/// 其它行（注释、`vn`、`vt`、`g`、`usemtl` 等）全部忽略。
use super::MeshLoader;
use crate::core::error::{MeshLoadError, Result};
use crate::geometry::mesh::MeshData;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::{FromStr, SplitWhitespace};

/// OBJ 格式加载器
///
/// # 字段解析规则
///
/// 数值字段按空白分隔、从左到右读取。第一个缺失或无法解析的字段取 0，
/// 同一条记录中其后的字段也全部取 0。面索引先按有符号整数解析，
/// 再以环绕运算转换为 `u16`：`(value - 1) as u16`，因此缺失的索引变成 65535，
/// 超过 65536 的索引会被截断。
///
/// # 使用示例
///
/// ```rust
/// use mesh_buffers::geometry::loaders::{MeshLoader, ObjLoader};
///
/// let mesh = ObjLoader::load_from_memory(b"v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n")?;
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.faces, vec![[0, 1, 2]]);
/// # Ok::<(), mesh_buffers::core::MeshBuffersError>(())
/// ```
pub struct ObjLoader;

impl ObjLoader {
    /// 从任意 `BufRead` 逐行解析
    ///
    /// 读取过程中发生的 IO 错误只记录日志，已读取的行照常使用。
    pub fn parse<R: BufRead>(mut reader: R) -> MeshData {
        let mut positions = Vec::new();
        let mut faces = Vec::new();

        let mut buf = Vec::new();
        let mut line_number = 0usize;

        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => line_number += 1,
                Err(e) => {
                    crate::loader_error!(
                        line = line_number + 1,
                        error = %e,
                        "读取 OBJ 数据时发生 IO 错误，使用已读取的内容继续"
                    );
                    break;
                }
            }

            let line = String::from_utf8_lossy(&buf);

            if let Some(rest) = line.strip_prefix("v ") {
                let mut fields = Fields::new(rest);
                let x = fields.next::<f32>();
                let y = fields.next::<f32>();
                let z = fields.next::<f32>();
                positions.push([x, y, z]);
            } else if let Some(rest) = line.strip_prefix("f ") {
                let mut fields = Fields::new(rest);
                let a = fields.next::<i64>();
                let b = fields.next::<i64>();
                let c = fields.next::<i64>();
                faces.push([to_zero_based(a), to_zero_based(b), to_zero_based(c)]);
            } else if !line.trim().is_empty() {
                crate::loader_trace!(line = line_number, "忽略无法识别的行");
            }
        }

        MeshData::from_geometry(positions, faces)
    }
}

impl MeshLoader for ObjLoader {
    fn load_from_file(path: &Path) -> Result<MeshData> {
        // 打开失败是唯一会返回错误的情况
        let file = File::open(path).map_err(|source| MeshLoadError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;

        let mesh_data = Self::parse(BufReader::new(file));

        crate::loader_info!(
            path = %path.display(),
            vertices = mesh_data.vertex_count(),
            faces = mesh_data.face_count(),
            "成功加载 OBJ 文件"
        );

        Ok(mesh_data)
    }

    fn load_from_memory(data: &[u8]) -> Result<MeshData> {
        Ok(Self::parse(data))
    }

    fn supported_extensions() -> &'static [&'static str] {
        &["obj"]
    }
}

/// 1-based 索引转换为 0-based，以 16 位无符号整数环绕
#[inline]
fn to_zero_based(index: i64) -> u16 {
    index.wrapping_sub(1) as u16
}

/// 类似格式化输入流的字段读取器：一旦失败，后续字段都返回默认值
struct Fields<'a> {
    tokens: SplitWhitespace<'a>,
    failed: bool,
}

impl<'a> Fields<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            tokens: text.split_whitespace(),
            failed: false,
        }
    }

    fn next<T: FromStr + Default>(&mut self) -> T {
        if self.failed {
            return T::default();
        }

        match self.tokens.next().and_then(|token| token.parse().ok()) {
            Some(value) => value,
            None => {
                self.failed = true;
                T::default()
            }
        }
    }
}
