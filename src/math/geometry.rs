//! 几何数学工具模块
//!
//! 从三角形面推导顶点法线。

use super::Vector3;

/// 计算三角形的面法线
///
/// `normalize(cross(b - a, c - a))`，逆时针绕序时朝向观察者。
/// 退化三角形（面积为零）的叉乘为零向量，归一化后各分量为 NaN，
/// 结果原样返回，不做钳制。
#[inline]
pub fn face_normal(a: [f32; 3], b: [f32; 3], c: [f32; 3]) -> [f32; 3] {
    let a = Vector3::from(a);
    let edge1 = Vector3::from(b) - a;
    let edge2 = Vector3::from(c) - a;

    edge1.cross(&edge2).normalize().into()
}

/// 为每个顶点分配法线
///
/// 所有法线初始化为零向量，然后按面的顺序计算面法线，
/// 并**覆盖**（而不是累加）该面三个顶点的法线。
/// 因此被多个面共享的顶点最终得到最后一个面的法线。
///
/// 索引超出顶点范围的面会被跳过，并记录一条警告。
///
/// # 示例
///
/// ```rust
/// use mesh_buffers::math::geometry::assign_face_normals;
///
/// let positions = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
/// let normals = assign_face_normals(&positions, &[[0, 1, 2]]);
///
/// assert_eq!(normals, vec![[0.0, 0.0, 1.0]; 3]);
/// ```
pub fn assign_face_normals(positions: &[[f32; 3]], faces: &[[u16; 3]]) -> Vec<[f32; 3]> {
    let mut normals = vec![[0.0f32; 3]; positions.len()];

    for (face_index, face) in faces.iter().enumerate() {
        let [ia, ib, ic] = face.map(usize::from);

        if ia >= positions.len() || ib >= positions.len() || ic >= positions.len() {
            crate::loader_warn!(
                face = face_index,
                indices = ?face,
                vertex_count = positions.len(),
                "面索引超出顶点范围，跳过法线计算"
            );
            continue;
        }

        let normal = face_normal(positions[ia], positions[ib], positions[ic]);
        normals[ia] = normal;
        normals[ib] = normal;
        normals[ic] = normal;
    }

    normals
}
