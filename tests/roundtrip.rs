use pixelmark::codec::channel_split::RECOVERABLE_BITS;
use pixelmark::codec::patchwork::PATCH_SIDE;
use pixelmark::media::pnm;
use pixelmark::{
    ChannelSplitter, ColorImage, GrayImage, GridTextCodec, PatchworkWatermark, Rgb,
};
use tempfile::TempDir;

fn checkerboard_gray(width: u32, height: u32) -> GrayImage {
    let pixels = (0..height)
        .flat_map(|r| (0..width).map(move |c| if (r + c) % 2 == 0 { 200 } else { 55 }))
        .collect();
    GrayImage::from_raw(width, height, pixels).unwrap()
}

#[test]
fn gray_image_survives_a_pgm_round_trip() {
    let out_dir = TempDir::new().unwrap();
    let target = out_dir.path().join("checkerboard.pgm");

    let image = checkerboard_gray(33, 17);
    pnm::save_gray(&target, &image, Some("checkerboard test image")).unwrap();

    let loaded = pnm::load_gray(&target).unwrap();
    assert_eq!(loaded, image);
}

#[test]
fn color_image_survives_a_ppm_round_trip() {
    let out_dir = TempDir::new().unwrap();
    let target = out_dir.path().join("gradient.ppm");

    let pixels = (0..32 * 32)
        .map(|i| Rgb::new((i % 251) as u8, (i % 127) as u8, (i % 63) as u8))
        .collect();
    let image = ColorImage::from_raw(32, 32, pixels).unwrap();
    pnm::save_color(&target, &image).unwrap();

    let loaded = pnm::load_color(&target).unwrap();
    assert_eq!(loaded, image);
}

#[test]
fn hidden_gray_image_survives_the_carrier_file() {
    let out_dir = TempDir::new().unwrap();
    let target = out_dir.path().join("carrier.ppm");

    let secret = checkerboard_gray(24, 24);
    let mut carrier =
        ColorImage::from_raw(24, 24, vec![Rgb::new(180, 90, 45); 24 * 24]).unwrap();

    ChannelSplitter::embed(&mut carrier, &secret).unwrap();
    pnm::save_color(&target, &carrier).unwrap();

    let loaded = pnm::load_color(&target).unwrap();
    let revealed = ChannelSplitter::extract(&loaded);

    for (got, original) in revealed.pixels().iter().zip(secret.pixels()) {
        assert_eq!(*got, original & RECOVERABLE_BITS);
    }
}

#[test]
fn hidden_message_survives_the_carrier_file() {
    let out_dir = TempDir::new().unwrap();
    let target = out_dir.path().join("note.pgm");
    let message = b"meet at dawn*";

    let mut image = checkerboard_gray(40, 40);
    GridTextCodec::hide(&mut image, 3, message).unwrap();
    pnm::save_gray(&target, &image, None).unwrap();

    let loaded = pnm::load_gray(&target).unwrap();
    let revealed = GridTextCodec::reveal(&loaded, 3, message.len());
    assert_eq!(revealed, message);
}

#[test]
fn patchwork_shifts_block_means_by_one() {
    let width = 64;
    let original = GrayImage::from_raw(width, 64, vec![100; 64 * 64]).unwrap();
    let mut marked = original.clone();
    let mut rng = fastrand::Rng::with_seed(99);

    let mark = PatchworkWatermark::apply(&mut marked, &mut rng).unwrap();

    let block_mean = |image: &GrayImage, origin: usize| -> f64 {
        let (row, col) = (origin as u32 / width, origin as u32 % width);
        let mut sum = 0u32;
        for dr in 0..PATCH_SIDE {
            for dc in 0..PATCH_SIDE {
                sum += u32::from(image.get(row + dr, col + dc));
            }
        }
        f64::from(sum) / f64::from(PATCH_SIDE * PATCH_SIDE)
    };

    if mark.block_a != mark.block_b {
        let overlap_free = {
            let (ar, ac) = (mark.block_a as u32 / width, mark.block_a as u32 % width);
            let (br, bc) = (mark.block_b as u32 / width, mark.block_b as u32 % width);
            ar.abs_diff(br) >= PATCH_SIDE || ac.abs_diff(bc) >= PATCH_SIDE
        };
        if overlap_free {
            assert_eq!(block_mean(&marked, mark.block_a), 99.0);
            assert_eq!(block_mean(&marked, mark.block_b), 101.0);
        }
    }

    // opposite shifts cancel out over the whole image
    let total_before: u64 = original.pixels().iter().map(|&p| u64::from(p)).sum();
    let total_after: u64 = marked.pixels().iter().map(|&p| u64::from(p)).sum();
    assert_eq!(total_before, total_after);
}
