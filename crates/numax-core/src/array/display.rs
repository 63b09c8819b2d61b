//! `Display` formatting for [`NdArray`].

use core::fmt;

use crate::Scalar;

use super::NdArray;

impl<T: Scalar> fmt::Display for NdArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "array([], shape={:?})", self.shape);
        }

        match self.ndim() {
            0 => write!(f, "array({})", self.data[0]),
            1 => {
                write!(f, "array([")?;
                for (i, v) in self.data.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{v}")?;
                }
                write!(f, "])")
            }
            2 => {
                let rows = self.shape[0];
                let cols = self.shape[1];
                writeln!(f, "array([")?;
                for r in 0..rows {
                    write!(f, "  [")?;
                    for c in 0..cols {
                        if c > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{}", self.data[r * cols + c])?;
                    }
                    if r < rows - 1 {
                        writeln!(f, "],")?;
                    } else {
                        writeln!(f, "]")?;
                    }
                }
                write!(f, "])")
            }
            _ => {
                // For 3-D+ arrays, show shape and a flat data summary.
                // Arrays with at most three elements are printed whole;
                // the elided form needs distinct head and tail entries.
                write!(f, "array(shape={:?}, data=[", self.shape)?;
                if self.data.len() <= 3 {
                    for (i, v) in self.data.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{v}")?;
                    }
                } else {
                    write!(
                        f,
                        "{}, {}, ..., {}",
                        self.data[0],
                        self.data[1],
                        self.data[self.data.len() - 1]
                    )?;
                }
                write!(f, "])")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_scalar() {
        let a = NdArray::scalar(42_i32);
        assert_eq!(format!("{a}"), "array(42)");
    }

    #[test]
    fn test_display_1d() {
        let a = NdArray::from_vec(vec![1, 2, 3], vec![3]).unwrap();
        assert_eq!(format!("{a}"), "array([1, 2, 3])");
    }

    #[test]
    fn test_display_2d() {
        let a = NdArray::from_vec(vec![1, 2, 3, 4], vec![2, 2]).unwrap();
        let s = format!("{a}");
        assert!(s.contains("array("));
        assert!(s.contains("[1, 2]"));
        assert!(s.contains("[3, 4]"));
    }

    #[test]
    fn test_display_empty() {
        let a = NdArray::<f64>::zeros(vec![0]);
        let s = format!("{a}");
        assert!(s.contains("[]"));
    }

    #[test]
    fn test_display_3d() {
        let a = NdArray::from_vec((0..24).collect(), vec![2, 3, 4]).unwrap();
        let s = format!("{a}");
        assert!(s.contains("shape=[2, 3, 4]"));
        assert!(s.contains("data=[0, 1, ..., 23]"));
    }

    #[test]
    fn test_display_3d_single_element() {
        let a = NdArray::from_vec(vec![7.0], vec![1, 1, 1]).unwrap();
        assert_eq!(format!("{a}"), "array(shape=[1, 1, 1], data=[7])");
    }

    #[test]
    fn test_display_3d_tiny_prints_whole_data() {
        let a = NdArray::from_vec(vec![5, 9], vec![2, 1, 1]).unwrap();
        assert_eq!(format!("{a}"), "array(shape=[2, 1, 1], data=[5, 9])");

        let b = NdArray::from_vec(vec![1, 2, 3], vec![1, 3, 1]).unwrap();
        assert_eq!(format!("{b}"), "array(shape=[1, 3, 1], data=[1, 2, 3])");
    }
}
