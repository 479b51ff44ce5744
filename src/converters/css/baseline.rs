//! Rules every deck stylesheet starts with.

use std::fmt::Write;

use crate::errors::Result;
use crate::models::style::{Alignment, LayoutType};

const VIEWPORT_RULES: &str = "\
html, body {
  margin: 0;
  width: 100vw;
  height: 100vh;
}

*, *::before, *::after {
  box-sizing: border-box;
}

.reveal .slides section {
  width: 100%;
  height: 100%;
  display: flex;
}
";

const BLOCK_RULES: &str = "\
.layout {
  display: flex;
  gap: 1rem;
}

.code-block {
  display: flex;
  gap: 1rem;
  align-items: flex-start;
}

.code-block pre {
  flex: 1 1 auto;
  margin: 0;
}

.code-block img {
  flex: 0 1 40%;
  max-height: 100%;
  object-fit: contain;
}

.annotated-media {
  position: relative;
  display: inline-block;
}

.annotated-image {
  display: block;
  width: 100%;
  height: 100%;
}

.annotation-layer {
  position: absolute;
  inset: 0;
  width: 100%;
  height: 100%;
  pointer-events: none;
  overflow: visible;
}

.anno-rect {
  fill: none;
  stroke: #e53935;
  stroke-width: 0.6;
  vector-effect: non-scaling-stroke;
}

.anno-arrow {
  stroke: #e53935;
  stroke-width: 0.6;
  vector-effect: non-scaling-stroke;
}

.anno-arrowhead {
  fill: #e53935;
}

.anno-label {
  fill: #e53935;
  font-size: 3px;
  font-weight: 700;
  paint-order: stroke;
  stroke: #ffffff;
  stroke-width: 0.4px;
}
";

/// Writes the fixed baseline: viewport sizing, box-sizing, the flex utility
/// classes emitted by layout resolution, and the code-block and annotation
/// rules.
pub fn write_baseline(out: &mut String) -> Result<()> {
    out.push_str(VIEWPORT_RULES);
    writeln!(out)?;

    for layout in [LayoutType::Vertical, LayoutType::Horizontal] {
        let direction = match layout {
            LayoutType::Vertical => "column",
            LayoutType::Horizontal => "row",
        };
        writeln!(out, ".{} {{\n  flex-direction: {};\n}}\n", layout, direction)?;
    }
    // Cross axis for `v-align-*`, main axis for `h-align-*`. Layout resolution
    // swaps the two for vertical containers.
    for alignment in Alignment::ALL {
        writeln!(
            out,
            ".v-align-{} {{\n  align-items: {};\n}}\n",
            alignment,
            alignment.flex_value()
        )?;
    }
    for alignment in Alignment::ALL {
        writeln!(
            out,
            ".h-align-{} {{\n  justify-content: {};\n}}\n",
            alignment,
            alignment.flex_value()
        )?;
    }

    out.push_str(BLOCK_RULES);
    Ok(())
}
