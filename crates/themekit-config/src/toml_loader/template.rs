//! Default TOML template with inline documentation comments.

pub(crate) fn default_config_toml() -> &'static str {
    r##"# Themekit Configuration
# Only override what you want to change -- missing fields use defaults.

[extraction]
# num_colors = 6            # 1-32, colors kept per image
# max_dimension = 100       # 1-4096, longest edge after downscaling
# sample_stride = 4         # 1-64, sample every Nth pixel
# iterations = 15           # 1-100, k-means rounds
# cluster_multiplier = 2    # 1-8, clusters per kept color
# min_alpha = 128           # pixels below this alpha are skipped
# min_luminance = 0.05      # 0.0-1.0, skip near-black
# max_luminance = 0.95      # 0.0-1.0, skip near-white

[contrast]
# text = 4.5                # 1.0-21.0, target for text and muted text
# accent = 3.0              # 1.0-21.0, target for primary and secondary

[generator]
# harmony = "complementary" # complementary, analogous, triadic,
#                           # split-complementary, monochromatic
# dark = false

[stylesheet]
# mode = "system"           # light, dark, system; active mode of
#                           # themes and CSS built from presets
"##
}
