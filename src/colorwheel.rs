//! Human readable color names.
//!
//! Based on Warren Mars' 12-hue color wheel. The names are "in the ballpark"
//! and occasionally off, especially between yellow and green where Hue
//! lights have a narrow gamut.

/// Names per hue bucket, ordered by the variations in [`VARIATIONS`].
static COLOR_NAMES: [[&str; 5]; 12] = [
    ["ham", "pale raspberry", "red", "dark red", "maroon"],
    ["pale buff", "buff", "tumeric", "yellow ochre", "milk chocolate"],
    ["cream", "butter", "yellow", "wasabi", "olive"],
    ["pale avacado", "avacado", "chartreuse", "sage", "oak leaf"],
    ["extra pale green", "green hellbore", "granny smith", "green", "zucchini"],
    ["pale variscite", "variscite", "crysolite", "light emerald", "brunswick green"],
    ["extra pale cyan", "blue sprice light", "cyan", "dark cyan", "pthalo green"],
    ["powder blue", "light azure", "azure", "cobalt blue", "prussian blue"],
    ["forget-me-not", "cornflower", "blue", "ultramarine", "navy"],
    ["mauve", "kunzite", "violet", "dark violet", "spectral violet"],
    ["light musk", "musk", "magenta", "dark magenta", "purple"],
    ["light pink", "pink", "dark pink", "prickly pear", "elderberry"],
];

/// Bucket boundaries in degrees. The last bucket, 340..360, is red again.
static HUE_ANGLES: [f64; 14] = [
    0.0, 20.0, 50.0, 70.0, 100.0, 140.0, 170.0, 190.0, 220.0, 260.0, 290.0, 310.0, 340.0, 360.0,
];

/// (saturation, brightness) of each named variation within a hue.
static VARIATIONS: [(f64, f64); 5] = [(0.25, 1.0), (0.50, 1.0), (1.0, 1.0), (1.0, 0.66), (1.0, 0.33)];

/// Name the color closest to the given hue (degrees), saturation and
/// brightness.
///
/// # Examples
///
/// ```
/// use hue_lights_rs::color_name;
///
/// assert_eq!(color_name(0.0, 1.0, 1.0), "red");
/// assert_eq!(color_name(240.0, 1.0, 0.33), "navy");
/// ```
pub fn color_name(hue: f64, sat: f64, brightness: f64) -> &'static str {
    let hue = hue.rem_euclid(360.0);

    let bucket = HUE_ANGLES
        .windows(2)
        .position(|edge| edge[0] <= hue && hue < edge[1])
        .unwrap_or(0)
        % COLOR_NAMES.len();

    let mut nearest = 0;
    let mut lowest = f64::INFINITY;
    for (i, (s, b)) in VARIATIONS.iter().enumerate() {
        let distance = (sat - s).powi(2) + (brightness - b).powi(2);
        if distance < lowest {
            lowest = distance;
            nearest = i;
        }
    }

    COLOR_NAMES[bucket][nearest]
}
