/// Trait for linear interpolation between two values.
///
/// Any function of shape `Fn(&T, &T, f32) -> T` can drive a [`Tween`](crate::animations::Tween);
/// this trait provides one for primitive numbers and fixed-size arrays (2D/3D vectors, RGBA colors).
pub trait Lerp: Sized {
    /// Interpolates between `start` and `end`.
    ///
    /// # Parameters
    /// * `start`:  the value returned for `t = 0`
    /// * `end`:  the value returned for `t = 1`
    /// * `t`:  the (eased) progress; may leave the `[0, 1]` range for overshooting easings
    ///
    /// # Returns
    /// The interpolated value.
    fn lerp(start: &Self, end: &Self, t: f32) -> Self;
}

macro_rules! impl_float_lerp {
    ($($variant:ty),*) => {
        $(
            impl Lerp for $variant {
                fn lerp(start: &Self, end: &Self, t: f32) -> Self {
                    start + (end - start) * t as Self
                }
            }
        )*
    };
}

macro_rules! impl_integer_lerp {
    ($($variant:ty),*) => {
        $(
            impl Lerp for $variant {
                fn lerp(start: &Self, end: &Self, t: f32) -> Self {
                    (*start as f64 + (*end as f64 - *start as f64) * t as f64).round() as Self
                }
            }
        )*
    };
}

impl_float_lerp!(f32, f64);
impl_integer_lerp!(u8, u16, u32, u64, i8, i16, i32, i64);

impl<T: Lerp, const N: usize> Lerp for [T; N] {
    fn lerp(start: &Self, end: &Self, t: f32) -> Self {
        std::array::from_fn(|index| T::lerp(&start[index], &end[index], t))
    }
}

/// Free-function form of [`Lerp::lerp`], usable directly as a tween interpolation function.
///
/// # Example
/// ```
/// use hermes_tween::utils::lerp;
/// assert_eq!(lerp(&0.0f32, &10.0, 0.5), 5.0);
/// assert_eq!(lerp(&[0.0f32, 10.0], &[10.0, 20.0], 0.5), [5.0, 15.0]);
/// ```
pub fn lerp<T: Lerp>(start: &T, end: &T, t: f32) -> T {
    T::lerp(start, end, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_f32() {
        assert!((lerp(&0.0f32, &10.0, 0.5) - 5.0).abs() < f32::EPSILON);
        assert!((lerp(&0.0f32, &10.0, 0.0) - 0.0).abs() < f32::EPSILON);
        assert!((lerp(&0.0f32, &10.0, 1.0) - 10.0).abs() < f32::EPSILON);
        assert!((lerp(&10.0f32, &0.0, 0.25) - 7.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_lerp_f64_overshoot() {
        assert!((lerp(&0.0f64, &100.0, 1.1) - 110.0).abs() < 1e-4);
        assert!((lerp(&0.0f64, &100.0, -0.1) + 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_lerp_integers() {
        assert_eq!(lerp(&0u8, &255, 0.5), 128);
        assert_eq!(lerp(&-100i32, &100, 0.5), 0);
        assert_eq!(lerp(&0i32, &10, 0.34), 3);
        assert_eq!(lerp(&10u16, &0, 1.0), 0);
    }

    #[test]
    fn test_lerp_arrays() {
        let vector = lerp(&[0.0f32, 0.0, 0.0], &[1.0, 2.0, 4.0], 0.5);
        assert_eq!(vector, [0.5, 1.0, 2.0]);

        let color = lerp(&[0.0f32, 0.0, 0.0, 1.0], &[1.0, 1.0, 1.0, 0.0], 0.25);
        assert_eq!(color, [0.25, 0.25, 0.25, 0.75]);
    }
}
