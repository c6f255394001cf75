//! Rendering a drawing into a raster image and encoding it.

use super::types::{ExportError, ExportFormat};
use crate::draw::{CairoSurface, GeometricalObject, Surface, WHITE, render_objects};
use crate::util::Extent;
use image::{DynamicImage, Rgb, RgbImage};
use log::{debug, info};
use std::path::Path;

/// Largest width or height cairo image surfaces accept.
const MAX_DIMENSION: i64 = 32_767;

/// Tight extent of all objects: line endpoints and circles' `center ± radius`.
///
/// Returns `None` for an empty drawing.
pub fn drawing_extent<'a, I>(objects: I) -> Option<Extent>
where
    I: IntoIterator<Item = &'a GeometricalObject>,
{
    objects
        .into_iter()
        .map(GeometricalObject::extent)
        .reduce(Extent::union)
}

/// Renders `objects` onto a white image the size of their bounding box.
///
/// The minimum corner of the bounding box maps to pixel `(0, 0)`.
pub fn render_image(objects: &[GeometricalObject]) -> Result<RgbImage, ExportError> {
    let extent = drawing_extent(objects).ok_or(ExportError::EmptyDrawing)?;
    let (width, height) = (extent.width(), extent.height());
    let bounds = match extent.to_rect() {
        Some(rect) if width <= MAX_DIMENSION && height <= MAX_DIMENSION => rect,
        _ => return Err(ExportError::TooLarge { width, height }),
    };
    debug!(
        "Rendering {} objects into {}x{} image at offset ({}, {})",
        objects.len(),
        bounds.width,
        bounds.height,
        bounds.x,
        bounds.y
    );

    let mut surface =
        cairo::ImageSurface::create(cairo::Format::Rgb24, bounds.width, bounds.height)?;
    {
        let ctx = cairo::Context::new(&surface)?;
        let mut target = CairoSurface::new(&ctx);
        target.clear(WHITE);
        ctx.translate(-(bounds.x as f64), -(bounds.y as f64));
        render_objects(&mut target, objects);
    }
    surface.flush();

    let stride = surface.stride() as usize;
    let data = surface.data()?;
    let mut image = RgbImage::new(bounds.width as u32, bounds.height as u32);
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let offset = y as usize * stride + x as usize * 4;
        // Rgb24 stores each pixel as a native-endian u32 with the top byte unused
        let value = u32::from_ne_bytes([
            data[offset],
            data[offset + 1],
            data[offset + 2],
            data[offset + 3],
        ]);
        *pixel = Rgb([(value >> 16) as u8, (value >> 8) as u8, value as u8]);
    }

    Ok(image)
}

/// Encodes an image in `format` to `path`.
pub fn write_image(image: RgbImage, path: &Path, format: ExportFormat) -> Result<(), ExportError> {
    let image = DynamicImage::ImageRgb8(image);
    match format {
        // The GIF encoder works on RGBA frames
        ExportFormat::Gif => image
            .to_rgba8()
            .save_with_format(path, format.image_format())?,
        ExportFormat::Jpg | ExportFormat::Png => {
            image.save_with_format(path, format.image_format())?
        }
    }
    Ok(())
}

/// Renders `objects` and writes them to `path` as `format`.
pub fn export_objects(
    objects: &[GeometricalObject],
    path: &Path,
    format: ExportFormat,
) -> Result<(), ExportError> {
    let image = render_image(objects)?;
    let (width, height) = image.dimensions();
    write_image(image, path, format)?;
    info!(
        "Exported {} objects as {} ({}x{}) to {}",
        objects.len(),
        format,
        width,
        height,
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLUE, Circle, FilledCircle, Line, RED};
    use crate::util::Rect;

    #[test]
    fn bounds_cover_lines_and_circles() {
        let objects: Vec<GeometricalObject> = vec![
            Line::new(10, 20, 30, 5, RED).into(),
            Circle::new(0, 0, 4, RED).into(),
        ];
        let extent = drawing_extent(&objects).unwrap();
        assert_eq!(extent.to_rect(), Rect::new(-4, -4, 35, 25));
        assert_eq!(drawing_extent(&Vec::<GeometricalObject>::new()), None);
    }

    #[test]
    fn extents_beyond_pixel_range_are_too_large() {
        let objects: Vec<GeometricalObject> = vec![
            Circle::new(i32::MAX, 0, 1, RED).into(),
            Line::new(i32::MIN, 0, i32::MIN, 0, RED).into(),
        ];
        match render_image(&objects) {
            Err(ExportError::TooLarge { width, height }) => {
                assert_eq!(width, (1 << 32) + 1);
                assert_eq!(height, 3);
            }
            other => panic!("expected TooLarge, got {:?}", other.map(|i| i.dimensions())),
        }
    }

    #[test]
    fn empty_drawing_is_rejected() {
        assert!(matches!(render_image(&[]), Err(ExportError::EmptyDrawing)));
    }

    #[test]
    fn image_is_translated_to_bounding_box() {
        let objects: Vec<GeometricalObject> = vec![
            FilledCircle::new(100, 200, 10, RED, BLUE).into(),
        ];
        let image = render_image(&objects).unwrap();
        assert_eq!(image.dimensions(), (21, 21));
        assert_eq!(image.get_pixel(10, 10), &Rgb([0, 0, 255]));
        assert_eq!(image.get_pixel(0, 0), &Rgb([255, 255, 255]));
    }

    #[test]
    fn every_format_writes_a_readable_file() {
        let dir = tempfile::tempdir().unwrap();
        let objects: Vec<GeometricalObject> = vec![Line::new(0, 0, 9, 4, RED).into()];
        for format in ExportFormat::ALL {
            let path = dir.path().join(format!("out.{}", format.extension()));
            export_objects(&objects, &path, format).unwrap();
            let decoded = image::open(&path).unwrap();
            assert_eq!((decoded.width(), decoded.height()), (10, 5));
        }
    }
}
