use std::f32::consts::PI;

use crate::base83;
use crate::color::{linear_to_srgb, sign_pow, srgb_to_linear};
use crate::{BlurhashError, Result, MAX_OUTPUT_PIXELS};

// Size flag, quantised maximum and the 4-character DC term
const HEADER_LEN: usize = 6;

/// A decoded placeholder image.
///
/// Pixel data is packed RGB, 3 bytes per pixel, row-major, with an exact
/// stride of `width * 3` (no padding, no alpha).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    /// RGB pixel data (3 bytes per pixel: R, G, B)
    pub pixels: Vec<u8>,
    /// Image width in pixels
    pub width: usize,
    /// Image height in pixels
    pub height: usize,
}

impl DecodedImage {
    /// Returns one row of pixels as a packed RGB byte slice.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: usize) -> &[u8] {
        let stride = self.width * 3;
        &self.pixels[y * stride..(y + 1) * stride]
    }

    /// Returns the RGB bytes of the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let idx = (y * self.width + x) * 3;
        [self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2]]
    }
}

/// A decoder from placeholder codes to pixel buffers.
///
/// The trait exists so callers can swap in a mock (or an alternative
/// synthesis strategy) behind the same seam; [`CosineDecoder`] is the
/// production implementation.
pub trait Decode {
    /// Decodes `code` into a `width` x `height` RGB image.
    fn decode(&self, code: &str, width: usize, height: usize, punch: f32)
        -> Result<DecodedImage>;
}

/// The standard BlurHash decoder: inverse cosine synthesis over the decoded
/// frequency components.
#[derive(Debug, Clone, Copy, Default)]
pub struct CosineDecoder;

impl Decode for CosineDecoder {
    fn decode(
        &self,
        code: &str,
        width: usize,
        height: usize,
        punch: f32,
    ) -> Result<DecodedImage> {
        decode_impl(code, width, height, punch)
    }
}

/// Decodes a BlurHash code into an RGB pixel buffer.
///
/// # Parameters
///
/// * `code` - The BlurHash string.
/// * `width`, `height` - Requested output size in pixels. Keep these small
///   (32 pixels wide is plenty for a placeholder) and let the display layer
///   scale up; cost grows with `width * height * components`.
/// * `punch` - Contrast multiplier applied to all AC terms. `1.0` decodes
///   the image as encoded, `0.0` yields a flat buffer of the average color,
///   larger values exaggerate gradients (subject to final byte clamping).
///
/// # Errors
///
/// Returns an error if:
/// - `code` is shorter than 6 characters ([`BlurhashError::TooShort`])
/// - `code`'s length doesn't match its declared component grid
///   ([`BlurhashError::LengthMismatch`])
/// - `width` or `height` is zero, or the output would exceed the pixel cap
///   ([`BlurhashError::InvalidSize`])
/// - the output buffer cannot be allocated
///   ([`BlurhashError::BufferAllocation`])
///
/// Characters outside the base-83 alphabet inside a well-sized code are
/// NOT rejected; see [`base83::decode`].
///
/// # Example
///
/// ```rust
/// use blurcode::blurhash_decode;
///
/// let image = blurhash_decode("LEHV6nWB2yk8pyo0adR*.7kCMdnj", 32, 24, 1.0)?;
/// assert_eq!((image.width, image.height), (32, 24));
/// assert_eq!(image.pixels.len(), 32 * 24 * 3);
/// # Ok::<(), blurcode::BlurhashError>(())
/// ```
#[must_use = "this returns the decoded image"]
pub fn blurhash_decode(
    code: &str,
    width: usize,
    height: usize,
    punch: f32,
) -> Result<DecodedImage> {
    CosineDecoder.decode(code, width, height, punch)
}

/// Decodes with the default punch of 1.0.
#[must_use = "this returns the decoded image"]
pub fn blurhash_decode_default(code: &str, width: usize, height: usize) -> Result<DecodedImage> {
    blurhash_decode(code, width, height, 1.0)
}

/// Returns the `(num_x, num_y)` component grid a code declares, without
/// synthesizing any pixels.
///
/// # Errors
///
/// Returns [`BlurhashError::TooShort`] if the code has fewer than 6
/// characters.
///
/// # Example
///
/// ```rust
/// use blurcode::components;
///
/// assert_eq!(components("LEHV6nWB2yk8pyo0adR*.7kCMdnj")?, (4, 3));
/// # Ok::<(), blurcode::BlurhashError>(())
/// ```
pub fn components(code: &str) -> Result<(usize, usize)> {
    let header = Header::parse(code.as_bytes())?;
    Ok((header.num_x, header.num_y))
}

/// One frequency component in linear light.
#[derive(Debug, Clone, Copy, Default)]
struct LinearRgb {
    r: f32,
    g: f32,
    b: f32,
}

struct Header {
    num_x: usize,
    num_y: usize,
    max_value: f32,
}

impl Header {
    fn parse(code: &[u8]) -> Result<Self> {
        if code.len() < HEADER_LEN {
            return Err(BlurhashError::TooShort { actual: code.len() });
        }

        let size_flag = base83::decode_bytes(&code[0..1]) as usize;
        let num_y = size_flag / 9 + 1;
        let num_x = size_flag % 9 + 1;

        let quantised_max = base83::decode_bytes(&code[1..2]);
        let max_value = (quantised_max as f32 + 1.0) / 166.0;

        Ok(Self {
            num_x,
            num_y,
            max_value,
        })
    }

    fn expected_len(&self) -> usize {
        4 + 2 * self.num_x * self.num_y
    }
}

/// Decodes the DC and AC terms into linear-light components, component
/// `(i, j)` at index `i + j * num_x`.
fn decode_components(code: &[u8], header: &Header, punch: f32) -> Result<Vec<LinearRgb>> {
    let expected = header.expected_len();
    if code.len() != expected {
        return Err(BlurhashError::LengthMismatch {
            expected,
            actual: code.len(),
        });
    }

    let count = header.num_x * header.num_y;
    let mut colors = Vec::with_capacity(count);
    colors.push(decode_dc(base83::decode_bytes(&code[2..6])));

    let scaled_max = header.max_value * punch;
    for k in 1..count {
        let start = 4 + k * 2;
        let value = base83::decode_bytes(&code[start..start + 2]);
        colors.push(decode_ac(value, scaled_max));
    }

    Ok(colors)
}

/// The DC term stores the average color as a 24-bit sRGB triple.
fn decode_dc(value: u32) -> LinearRgb {
    LinearRgb {
        r: srgb_to_linear((value >> 16) as u8),
        g: srgb_to_linear((value >> 8 & 255) as u8),
        b: srgb_to_linear((value & 255) as u8),
    }
}

/// AC terms store three base-19 digits on a signed square curve around the
/// middle digit 9, scaled by the header's maximum value.
fn decode_ac(value: u32, max_value: f32) -> LinearRgb {
    let quant_r = (value / (19 * 19)) as f32;
    let quant_g = ((value / 19) % 19) as f32;
    let quant_b = (value % 19) as f32;

    LinearRgb {
        r: sign_pow((quant_r - 9.0) / 9.0, 2.0) * max_value,
        g: sign_pow((quant_g - 9.0) / 9.0, 2.0) * max_value,
        b: sign_pow((quant_b - 9.0) / 9.0, 2.0) * max_value,
    }
}

/// Reconstructs the pixel buffer: every pixel is a weighted sum of the
/// separable cosine basis over all components, converted back to sRGB.
fn synthesize(
    colors: &[LinearRgb],
    num_x: usize,
    num_y: usize,
    width: usize,
    height: usize,
) -> Result<Vec<u8>> {
    let bytes = width * height * 3;
    let mut pixels = Vec::new();
    pixels
        .try_reserve_exact(bytes)
        .map_err(|_| BlurhashError::BufferAllocation { bytes })?;
    pixels.resize(bytes, 0);

    // Precompute the axis cosines once instead of calling cos() per pixel
    // per component. Same accumulation order as the direct form, so output
    // bytes are unchanged.
    let mut cos_x = vec![0.0f32; num_x * width];
    for i in 0..num_x {
        for x in 0..width {
            cos_x[i * width + x] = (PI * x as f32 * i as f32 / width as f32).cos();
        }
    }
    let mut cos_y = vec![0.0f32; num_y * height];
    for j in 0..num_y {
        for y in 0..height {
            cos_y[j * height + y] = (PI * y as f32 * j as f32 / height as f32).cos();
        }
    }

    let stride = width * 3;
    for (y, row) in pixels.chunks_exact_mut(stride).enumerate() {
        for x in 0..width {
            let mut r = 0.0f32;
            let mut g = 0.0f32;
            let mut b = 0.0f32;

            for j in 0..num_y {
                let basis_y = cos_y[j * height + y];
                for i in 0..num_x {
                    let basis = cos_x[i * width + x] * basis_y;
                    let color = colors[i + j * num_x];
                    r += color.r * basis;
                    g += color.g * basis;
                    b += color.b * basis;
                }
            }

            row[3 * x] = linear_to_srgb(r);
            row[3 * x + 1] = linear_to_srgb(g);
            row[3 * x + 2] = linear_to_srgb(b);
        }
    }

    Ok(pixels)
}

fn decode_impl(code: &str, width: usize, height: usize, punch: f32) -> Result<DecodedImage> {
    guard_dimensions(width, height)?;

    let bytes = code.as_bytes();
    let header = Header::parse(bytes)?;
    let colors = decode_components(bytes, &header, punch)?;
    let pixels = synthesize(&colors, header.num_x, header.num_y, width, height)?;

    Ok(DecodedImage {
        pixels,
        width,
        height,
    })
}

fn guard_dimensions(width: usize, height: usize) -> Result<()> {
    let too_large = width
        .checked_mul(height)
        .is_none_or(|pixels| pixels > MAX_OUTPUT_PIXELS);
    if width == 0 || height == 0 || too_large {
        return Err(BlurhashError::InvalidSize { width, height });
    }
    Ok(())
}
