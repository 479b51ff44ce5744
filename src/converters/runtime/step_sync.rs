//! Keeps a code block's legend image in step with its line highlights.

use std::fmt::Write;

use crate::converters::html::code::STEP_SEPARATOR;
use crate::errors::Result;

/// Index of the legend image to show once `visible` highlight fragments of a
/// block are revealed, out of `count` images. Clamps to the last image and is
/// `None` when there are no images.
pub fn image_index(visible: usize, count: usize) -> Option<usize> {
    count.checked_sub(1).map(|last| visible.min(last))
}

/// Writes the listener that swaps legend images on every step change.
///
/// The listener mirrors [`image_index`]: it counts the visible fragments of
/// each `<pre>` whose `<code>` carries `data-image-steps`, clamps the count to
/// the last image and assigns `src` only when it changes.
pub fn write_listener(out: &mut String) -> Result<()> {
    writeln!(out, "// Keep code-highlight legend images in step with the highlights")?;
    writeln!(out, "Reveal.on('slidechanged', updateLegendImages);")?;
    writeln!(out, "Reveal.on('fragmentshown', updateLegendImages);")?;
    writeln!(out, "Reveal.on('fragmenthidden', updateLegendImages);")?;
    writeln!(out)?;
    writeln!(out, "function updateLegendImages() {{")?;
    writeln!(out, "    const slide = Reveal.getCurrentSlide();")?;
    writeln!(out, "    if (!slide) return;")?;
    writeln!(out)?;
    writeln!(out, "    const blocks: HTMLElement[] = Array.from(slide.querySelectorAll('pre'));")?;
    writeln!(out, "    for (const block of blocks) {{")?;
    writeln!(out, "        const code = block.querySelector('code[data-image-steps]');")?;
    writeln!(out, "        if (!code) continue;")?;
    writeln!(out, "        const steps = code.getAttribute('data-image-steps');")?;
    writeln!(out, "        const target = code.getAttribute('data-target');")?;
    writeln!(out, "        if (!steps || !target) continue;")?;
    writeln!(out)?;
    writeln!(out, "        const images = steps.split('{}');", STEP_SEPARATOR)?;
    writeln!(out, "        const visible = block.querySelectorAll('.fragment.visible').length;")?;
    writeln!(out, "        const index = Math.min(visible, images.length - 1);")?;
    writeln!(out, "        const src = images[index];")?;
    writeln!(
        out,
        "        const img = (slide.querySelector(target) || document.querySelector(target)) as HTMLImageElement | null;"
    )?;
    writeln!(out, "        if (img && img.getAttribute('src') !== src) {{")?;
    writeln!(out, "            img.setAttribute('src', src);")?;
    writeln!(out, "        }}")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_index_clamps_to_last_image() {
        assert_eq!(image_index(5, 3), Some(2));
        assert_eq!(image_index(1, 3), Some(1));
        assert_eq!(image_index(0, 3), Some(0));
        assert_eq!(image_index(0, 1), Some(0));
        assert_eq!(image_index(4, 0), None);
    }

    #[test]
    fn test_listener_splits_on_step_separator() {
        let mut out = String::new();
        write_listener(&mut out).unwrap();
        assert!(out.contains("steps.split('|')"));
        assert!(out.contains("Math.min(visible, images.length - 1)"));
        assert!(out.contains("Reveal.on('fragmenthidden', updateLegendImages);"));
    }
}
