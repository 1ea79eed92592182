use image::{ImageBuffer, Rgb, RgbImage};
use seamcarve::{calculate_energy, PixelGrid, SeamCarver, SeamFinder, BORDER_ENERGY};

// A deterministic, bumpy test image.  A small linear congruential
// generator keeps it reproducible without pulling in a random crate.
fn noisy(width: u32, height: u32, seed: u32) -> RgbImage {
    let mut state = seed;
    ImageBuffer::from_fn(width, height, |_, _| {
        let mut next = || {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            (state >> 16) as u8
        };
        Rgb([next(), next(), next()])
    })
}

fn assert_valid_seam(seam: &[u32], width: u32, height: u32) {
    assert_eq!(seam.len(), height as usize);
    assert!(seam.iter().all(|x| *x < width), "{:?} escapes width {}", seam, width);
    assert!(
        seam.windows(2).all(|w| (w[0] as i64 - w[1] as i64).abs() <= 1),
        "{:?} is not connected",
        seam
    );
}

fn assert_energy_is_fresh(carver: &SeamCarver) {
    let recalculated = calculate_energy(&PixelGrid::from_image(&carver.picture()));
    assert_eq!(carver.energy_map(), recalculated);
}

fn assert_border_is_sentinel(carver: &SeamCarver) {
    let (width, height) = (carver.width(), carver.height());
    for y in 0..height {
        for x in 0..width {
            if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
                assert_eq!(carver.energy(x, y), Ok(BORDER_ENERGY));
            }
        }
    }
}

#[test]
fn center_highlight_raises_its_neighbors() {
    let image: RgbImage = ImageBuffer::from_fn(5, 5, |x, y| {
        if (x, y) == (2, 2) {
            Rgb([255, 255, 255])
        } else {
            Rgb([0, 0, 0])
        }
    });
    let carver = SeamCarver::new(&image).unwrap();
    let neighbors = [(2, 1), (1, 2), (3, 2), (2, 3)];
    let others = [(1, 1), (3, 1), (1, 3), (3, 3), (2, 2)];
    for &(nx, ny) in neighbors.iter() {
        let high = carver.energy(nx, ny).unwrap();
        assert_eq!(high, 195_075.0_f64.sqrt());
        for &(ox, oy) in others.iter() {
            assert!(high > carver.energy(ox, oy).unwrap());
        }
    }
    assert_eq!(carver.energy(0, 0), Ok(BORDER_ENERGY));
}

#[test]
fn uniform_image_has_flat_interior() {
    let image: RgbImage = ImageBuffer::from_pixel(4, 4, Rgb([80, 120, 160]));
    let mut carver = SeamCarver::new(&image).unwrap();
    let mut border = 0;
    for y in 0..4 {
        for x in 0..4 {
            let energy = carver.energy(x, y).unwrap();
            if (1..3).contains(&x) && (1..3).contains(&y) {
                assert_eq!(energy, 0.0);
            } else {
                assert_eq!(energy, BORDER_ENERGY);
                border += 1;
            }
        }
    }
    assert_eq!(border, 12);

    let seam = carver.find_vertical_seam();
    assert_valid_seam(&seam, 4, 4);
    let total: f64 = (0u32..)
        .zip(seam.iter())
        .map(|(y, x)| carver.energy(*x, y).unwrap())
        .sum();
    assert_eq!(total, 2.0 * BORDER_ENERGY);
}

#[test]
fn vertical_removal_down_to_one_column() {
    let mut carver = SeamCarver::new(&noisy(9, 6, 7)).unwrap();
    while carver.width() > 1 {
        let (width, height) = (carver.width(), carver.height());
        let seam = carver.find_vertical_seam();
        assert_valid_seam(&seam, width, height);
        carver.remove_vertical_seam(&seam).unwrap();
        assert_eq!((carver.width(), carver.height()), (width - 1, height));
        assert_energy_is_fresh(&carver);
        assert_border_is_sentinel(&carver);
    }
    assert_eq!(carver.picture().dimensions(), (1, 6));
}

#[test]
fn horizontal_removal_down_to_one_row() {
    let mut carver = SeamCarver::new(&noisy(5, 8, 11)).unwrap();
    while carver.height() > 1 {
        let (width, height) = (carver.width(), carver.height());
        let seam = carver.find_horizontal_seam();
        assert_valid_seam(&seam, height, width);
        carver.remove_horizontal_seam(&seam).unwrap();
        assert_eq!((carver.width(), carver.height()), (width, height - 1));
        assert_energy_is_fresh(&carver);
        assert_border_is_sentinel(&carver);
    }
    assert_eq!(carver.picture().dimensions(), (5, 1));
}

#[test]
fn alternating_directions_stay_consistent() {
    let mut carver = SeamCarver::new(&noisy(12, 10, 3)).unwrap();
    for _ in 0..4 {
        let seam = carver.find_vertical_seam();
        carver.remove_vertical_seam(&seam).unwrap();
        let seam = carver.find_horizontal_seam();
        carver.remove_horizontal_seam(&seam).unwrap();
        assert_energy_is_fresh(&carver);
    }
    assert_eq!((carver.width(), carver.height()), (8, 6));
}

#[test]
fn picture_is_a_copy() {
    let source = noisy(6, 4, 5);
    let mut carver = SeamCarver::new(&source).unwrap();
    let mut first = carver.picture();
    first.put_pixel(0, 0, Rgb([1, 2, 3]));
    assert_eq!(carver.picture(), source);

    carver.find_horizontal_seam();
    assert_eq!(carver.picture(), source);
}

#[test]
fn find_without_remove_changes_nothing_visible() {
    let source = noisy(7, 5, 9);
    let mut carver = SeamCarver::new(&source).unwrap();
    let before = carver.energy_map();
    let vertical = carver.find_vertical_seam();
    carver.find_horizontal_seam();
    assert_eq!(carver.find_vertical_seam(), vertical);
    assert_eq!(carver.energy_map(), before);
}
