use super::*;
use crate::foundation::core::Fps;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "chromaspiral-png-{name}-{}",
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn frame_paths_are_zero_padded() {
    let sink = PngSequenceSink::with_prefix("/tmp/out", "shot");
    assert_eq!(
        sink.frame_path(FrameIndex(42)),
        PathBuf::from("/tmp/out/shot_00042.png")
    );
}

#[test]
fn writes_one_decodable_png_per_frame() {
    let dir = scratch_dir("seq");
    let mut sink = PngSequenceSink::new(&dir);
    sink.begin(SinkConfig {
        width: 3,
        height: 2,
        fps: Fps::default(),
    })
    .unwrap();
    for i in 0..2u8 {
        let frame = FrameRGBA {
            width: 3,
            height: 2,
            data: [10 * i, 20, 30, 255].repeat(6),
            premultiplied: true,
        };
        sink.push_frame(FrameIndex(u64::from(i)), &frame).unwrap();
    }
    sink.end().unwrap();

    assert_eq!(sink.written().len(), 2);
    let img = image::open(dir.join("frame_00001.png")).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (3, 2));
    assert_eq!(img.get_pixel(2, 1).0, [10, 20, 30, 255]);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn end_without_begin_fails() {
    let mut sink = PngSequenceSink::new(scratch_dir("unused"));
    assert!(sink.end().is_err());
}

#[test]
fn no_overwrite_rejects_existing_frame() {
    let dir = scratch_dir("keep");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("frame_00000.png"), b"keep").unwrap();

    let mut sink = PngSequenceSink::new(&dir).with_overwrite(false);
    sink.begin(SinkConfig {
        width: 1,
        height: 1,
        fps: Fps::default(),
    })
    .unwrap();
    let frame = FrameRGBA {
        width: 1,
        height: 1,
        data: vec![0, 0, 0, 255],
        premultiplied: true,
    };
    let err = sink.push_frame(FrameIndex(0), &frame).unwrap_err();
    assert!(matches!(err, ChromaError::Validation(_)));
    assert_eq!(std::fs::read(dir.join("frame_00000.png")).unwrap(), b"keep");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn write_png_creates_missing_parents() {
    let dir = scratch_dir("nested");
    let path = dir.join("a").join("b").join("one.png");
    write_png(&path, &[1, 2, 3, 255], 1, 1).unwrap();

    let img = image::open(&path).unwrap().to_rgba8();
    assert_eq!(img.get_pixel(0, 0).0, [1, 2, 3, 255]);

    let _ = std::fs::remove_dir_all(&dir);
}
