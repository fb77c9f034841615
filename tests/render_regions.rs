//! End-to-end checks on decoded PNG output.

use image::RgbImage;
use sgf_regions::{
    Color, REGIONS, SgfError, all_region_images, extract_stones, find_region, prepare_sgf,
    region_image, render_region,
};

fn decode(png: &[u8]) -> RgbImage {
    image::load_from_memory(png)
        .expect("rendered bytes should decode")
        .to_rgb8()
}

fn is_dark(img: &RgbImage, x: u32, y: u32) -> bool {
    img.get_pixel(x, y).0[0] < 128
}

#[test]
fn test_example_position_region3() {
    let sgf = prepare_sgf("(;AB[aa][ss]AW[jj])\n").unwrap();
    let stones = extract_stones(&sgf);
    assert_eq!(stones.len(), 3);
    assert_eq!(stones.iter().filter(|s| s.color == Color::Black).count(), 2);

    let img = decode(&region_image(&sgf, "region3").unwrap().png);
    assert_eq!(img.dimensions(), (390, 390));

    // Black stone at (0, 0), centered on the top-left grid corner.
    assert!(is_dark(&img, 20, 20));
    assert!(is_dark(&img, 26, 26));

    // White stone at (9, 9): white inside, dark outline, on the bottom-right corner.
    assert_eq!(img.get_pixel(335, 335).0, [255, 255, 255]);
    assert!(img.get_pixel(348, 335).0[0] < 200);

    // The stone at (18, 18) lies outside region3 and changes nothing.
    let without_far_stone: Vec<_> = stones.iter().copied().filter(|s| s.x != 18).collect();
    let region = find_region("region3").unwrap();
    assert_eq!(
        render_region(&stones, region).unwrap(),
        render_region(&without_far_stone, region).unwrap()
    );
}

#[test]
fn test_boundary_stone_appears_in_both_regions() {
    let sgf = "(;AB[jf])";
    let region1 = decode(&region_image(sgf, "region1").unwrap().png);
    let region3 = decode(&region_image(sgf, "region3").unwrap().png);
    let empty1 = decode(&region_image("(;)", "region1").unwrap().png);
    let empty3 = decode(&region_image("(;)", "region3").unwrap().png);

    assert!(is_dark(&region1, 26, 201));
    assert!(!is_dark(&empty1, 26, 201));
    assert!(is_dark(&region3, 341, 201));
    assert!(!is_dark(&empty3, 341, 201));
}

#[test]
fn test_outside_stones_leave_region_untouched() {
    let empty = region_image("(;)", "region2").unwrap().png;
    let far = region_image("(;AB[aa][ha][ah]AW[bb][hh])", "region2").unwrap().png;
    assert_eq!(empty, far);
}

#[test]
fn test_dimensions_depend_only_on_region() {
    for region in REGIONS.iter() {
        let sparse = decode(&region_image("(;)", region.name).unwrap().png);
        let dense = decode(&region_image("(;AB[aa][jj][ss][aj]AW[ja][js][sj])", region.name).unwrap().png);
        assert_eq!(sparse.dimensions(), dense.dimensions());
    }
}

#[test]
fn test_malformed_input_rejected() {
    assert!(matches!(prepare_sgf("not sgf"), Err(SgfError::InvalidInput(_))));
}

#[test]
fn test_region_name_case() {
    let sgf = "(;AB[pd]AW[dp])";
    assert_eq!(
        region_image(sgf, "REGION1").unwrap(),
        region_image(sgf, "region1").unwrap()
    );
}

#[tokio::test]
async fn test_all_regions_match_single_renders() {
    let sgf = "(;AB[dd][pd][jj]AW[dp][pp])";
    let images = all_region_images(sgf).await.unwrap();
    assert_eq!(images.len(), REGIONS.len());
    for (image, region) in images.iter().zip(REGIONS.iter()) {
        assert_eq!(image.name, region.name);
        assert_eq!(image.png, region_image(sgf, region.name).unwrap().png);
        decode(&image.png);
    }
}
