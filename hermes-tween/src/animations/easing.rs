use std::fmt::{Display, Formatter};

use log::warn;
use simple_easing::*;

/// Represents a set of easing function.
///
/// An easing function is a temporal function that takes a time between 0 and 1 (beginning / end)
/// and associate to it a number value according to an ease curve.
/// Back, elastic and bounce curves may leave the `[0, 1]` range in between, but all curves (except
/// `Reverse` and `RoundTrip`) are anchored on 0 and 1 at both ends.
///
/// See <https://easings.net> for a representation of easing methods.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Easing {
    /// <https://easings.net/#easeInBack>
    BackIn,
    /// <https://easings.net/#easeInOutBack>
    BackInOut,
    /// <https://easings.net/#easeOutBack>
    BackOut,
    /// <https://easings.net/#easeInBounce>
    BounceIn,
    /// <https://easings.net/#easeInOutBounce>
    BounceInOut,
    /// <https://easings.net/#easeOutBounce>
    BounceOut,
    /// <https://easings.net/#easeInCirc>
    CircIn,
    /// <https://easings.net/#easeInOutCirc>
    CircInOut,
    /// <https://easings.net/#easeOutCirc>
    CircOut,
    /// <https://easings.net/#easeInCubic>
    CubicIn,
    /// <https://easings.net/#easeInOutCubic>
    CubicInOut,
    /// <https://easings.net/#easeOutCubic>
    CubicOut,
    /// <https://easings.net/#easeInElastic>
    ElasticIn,
    /// <https://easings.net/#easeInOutElastic>
    ElasticInOut,
    /// <https://easings.net/#easeOutElastic>
    ElasticOut,
    /// <https://easings.net/#easeInExpo>
    ExpoIn,
    /// <https://easings.net/#easeInOutExpo>
    ExpoInOut,
    /// <https://easings.net/#easeOutExpo>
    ExpoOut,
    /// Applies no transformation (default).
    #[default]
    Linear,
    /// <https://easings.net/#easeInQuad>
    QuadIn,
    /// <https://easings.net/#easeInOutQuad>
    QuadInOut,
    /// <https://easings.net/#easeOutQuad>
    QuadOut,
    /// <https://easings.net/#easeInQuart>
    QuartIn,
    /// <https://easings.net/#easeInOutQuart>
    QuartInOut,
    /// <https://easings.net/#easeOutQuart>
    QuartOut,
    /// <https://easings.net/#easeInQuint>
    QuintIn,
    /// <https://easings.net/#easeInOutQuint>
    QuintInOut,
    /// <https://easings.net/#easeOutQuint>
    QuintOut,
    /// A linear easing that goes from 1.0 to 0.0.
    Reverse,
    /// A linear easing that goes from 0.0 to 1.0 and back to 0.0.
    RoundTrip,
    /// <https://easings.net/#easeInSine>
    SineIn,
    /// <https://easings.net/#easeInOutSine>
    SineInOut,
    /// <https://easings.net/#easeOutSine>
    SineOut,
}

/// Name table used by [`Easing::from_name`]: (easing, family, mode).
const NAMES: [(Easing, &str, &str); 33] = [
    (Easing::BackIn, "back", "in"),
    (Easing::BackInOut, "back", "inout"),
    (Easing::BackOut, "back", "out"),
    (Easing::BounceIn, "bounce", "in"),
    (Easing::BounceInOut, "bounce", "inout"),
    (Easing::BounceOut, "bounce", "out"),
    (Easing::CircIn, "circ", "in"),
    (Easing::CircInOut, "circ", "inout"),
    (Easing::CircOut, "circ", "out"),
    (Easing::CubicIn, "cubic", "in"),
    (Easing::CubicInOut, "cubic", "inout"),
    (Easing::CubicOut, "cubic", "out"),
    (Easing::ElasticIn, "elastic", "in"),
    (Easing::ElasticInOut, "elastic", "inout"),
    (Easing::ElasticOut, "elastic", "out"),
    (Easing::ExpoIn, "expo", "in"),
    (Easing::ExpoInOut, "expo", "inout"),
    (Easing::ExpoOut, "expo", "out"),
    (Easing::Linear, "linear", ""),
    (Easing::QuadIn, "quad", "in"),
    (Easing::QuadInOut, "quad", "inout"),
    (Easing::QuadOut, "quad", "out"),
    (Easing::QuartIn, "quart", "in"),
    (Easing::QuartInOut, "quart", "inout"),
    (Easing::QuartOut, "quart", "out"),
    (Easing::QuintIn, "quint", "in"),
    (Easing::QuintInOut, "quint", "inout"),
    (Easing::QuintOut, "quint", "out"),
    (Easing::Reverse, "reverse", ""),
    (Easing::RoundTrip, "roundtrip", ""),
    (Easing::SineIn, "sine", "in"),
    (Easing::SineInOut, "sine", "inout"),
    (Easing::SineOut, "sine", "out"),
];

impl Easing {
    /// Call the easing function.
    pub fn call(&self, t: f32) -> f32 {
        match self {
            Easing::BackIn => back_in(t),
            Easing::BackInOut => back_in_out(t),
            Easing::BackOut => back_out(t),
            Easing::BounceIn => bounce_in(t),
            Easing::BounceInOut => bounce_in_out(t),
            Easing::BounceOut => bounce_out(t),
            Easing::CircIn => circ_in(t),
            Easing::CircInOut => circ_in_out(t),
            Easing::CircOut => circ_out(t),
            Easing::CubicIn => cubic_in(t),
            Easing::CubicInOut => cubic_in_out(t),
            Easing::CubicOut => cubic_out(t),
            Easing::ElasticIn => elastic_in(t),
            Easing::ElasticInOut => elastic_in_out(t),
            Easing::ElasticOut => elastic_out(t),
            Easing::ExpoIn => expo_in(t),
            Easing::ExpoInOut => expo_in_out(t),
            Easing::ExpoOut => expo_out(t),
            Easing::Linear => t,
            Easing::QuadIn => quad_in(t),
            Easing::QuadInOut => quad_in_out(t),
            Easing::QuadOut => quad_out(t),
            Easing::QuartIn => quart_in(t),
            Easing::QuartInOut => quart_in_out(t),
            Easing::QuartOut => quart_out(t),
            Easing::QuintIn => quint_in(t),
            Easing::QuintInOut => quint_in_out(t),
            Easing::QuintOut => quint_out(t),
            Easing::Reverse => reverse(t),
            Easing::RoundTrip => roundtrip(t),
            Easing::SineIn => sine_in(t),
            Easing::SineInOut => sine_in_out(t),
            Easing::SineOut => sine_out(t),
        }
    }

    /// Table-style entry point: shapes the normalized progress `t` with the given easing.
    pub fn evaluate(easing: Easing, t: f32) -> f32 {
        easing.call(t)
    }

    /// Finds an easing by its name.
    ///
    /// Names are case-insensitive and may use separators or an `ease` prefix, with the mode either
    /// before or after the family: `"quad_in"`, `"QuadIn"`, `"InQuad"`, `"easeInOutSine"`...
    /// An unknown name falls back to [`Easing::Linear`].
    ///
    /// # Example
    /// ```
    /// use hermes_tween::animations::Easing;
    /// assert_eq!(Easing::from_name("easeOutBounce"), Easing::BounceOut);
    /// assert_eq!(Easing::from_name("whatever"), Easing::Linear);
    /// ```
    pub fn from_name(name: &str) -> Easing {
        let normalized: String = name
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        let normalized = normalized.strip_prefix("ease").unwrap_or(&normalized);

        let found = NAMES.iter().find(|(_, family, mode)| {
            normalized == format!("{}{}", family, mode)
                || normalized == format!("{}{}", mode, family)
        });

        match found {
            Some((easing, _, _)) => *easing,
            None => {
                warn!("Unknown easing '{}': falls back to Linear", name);
                Easing::Linear
            }
        }
    }
}

impl From<&str> for Easing {
    fn from(name: &str) -> Self {
        Easing::from_name(name)
    }
}

impl Display for Easing {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
