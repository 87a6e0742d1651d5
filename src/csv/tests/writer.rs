//! 写入文本单元测试

use std::fs;

use ndarray::Array2;

use crate::csv::{self, CsvCodec, CsvError, CsvOptions, Delimiter};
use crate::matrix::Matrix;

fn write_to_string(codec: &CsvCodec, matrix: &Matrix) -> String {
    let mut buffer = Vec::new();
    codec.write_to(&mut buffer, matrix).expect("写入失败");
    String::from_utf8(buffer).unwrap()
}

#[test]
fn test_write_comma_without_trailing_delimiter() {
    let matrix = Matrix::new(&[1., 2.5, -3., 0.1, 0., 1e-7], 2, 3);
    let text = write_to_string(&CsvCodec::default(), &matrix);
    assert_eq!(text, "1,2.5,-3\n0.1,0,0.0000001\n");
}

#[test]
fn test_write_comma_with_trailing_delimiter() {
    let matrix = Matrix::new(&[1., 2., 3., 4.], 2, 2);
    let codec = CsvCodec::new(CsvOptions::default().trailing_delimiter(true));
    assert_eq!(write_to_string(&codec, &matrix), "1,2,\n3,4,\n");
}

#[test]
fn test_write_space_separated() {
    let matrix = Matrix::new(&[1., 2., 3., 4.], 2, 2);
    let codec = CsvCodec::new(CsvOptions::space_separated());
    assert_eq!(write_to_string(&codec, &matrix), "1 2 \n3 4 \n");

    let codec = CsvCodec::new(CsvOptions::space_separated().trailing_delimiter(false));
    assert_eq!(write_to_string(&codec, &matrix), "1 2\n3 4\n");
}

#[test]
fn test_write_empty_matrix() {
    // 行数为0：空文件
    let text = write_to_string(&CsvCodec::default(), &Matrix::zeros(0, 4));
    assert_eq!(text, "");

    // 列数为0：只有换行，行尾分隔符也不写
    let codec = CsvCodec::new(CsvOptions::default().trailing_delimiter(true));
    let text = write_to_string(&codec, &Matrix::zeros(3, 0));
    assert_eq!(text, "\n\n\n");
}

#[test]
fn test_write_file_overwrites_existing() {
    let dir = tempfile::tempdir().expect("创建临时目录失败");
    let path = dir.path().join("probs.csv");
    fs::write(&path, "旧内容，应被覆盖\n旧内容\n旧内容\n").unwrap();

    let matrix = Matrix::new(&[0.25, 0.75], 1, 2);
    csv::write_matrix(&path, &matrix, Delimiter::Comma, false).expect("写入失败");
    assert_eq!(fs::read_to_string(&path).unwrap(), "0.25,0.75\n");
}

#[test]
fn test_write_array2() {
    let array: Array2<f32> = ndarray::arr2(&[[1.5, -2.], [0., 4.]]);
    let mut buffer = Vec::new();
    CsvCodec::default()
        .write_to(&mut buffer, &array)
        .expect("写入失败");
    assert_eq!(String::from_utf8(buffer).unwrap(), "1.5,-2\n0,4\n");
}

#[test]
fn test_write_to_unopenable_path() {
    let dir = tempfile::tempdir().expect("创建临时目录失败");
    let path = dir.path().join("no_such_dir").join("probs.csv");

    let result = CsvCodec::default().write(&path, &Matrix::zeros(1, 1));
    match result {
        Err(CsvError::Open { path: failed, .. }) => assert_eq!(failed, path),
        other => panic!("应返回 Open 错误，实际: {:?}", other),
    }
    assert!(!path.exists());
}
