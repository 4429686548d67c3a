//! Parse encoded bodies with `multer` to check they are readable by a
//! standard multipart consumer.

use bytes::Bytes;
use formdata_core::{BinaryPayload, EncoderOptions, FormData, RandomBoundary};
use futures::stream;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn multipart(form: &FormData) -> multer::Multipart<'static> {
    let body = form.body().unwrap();
    let chunks = stream::iter(vec![Ok::<_, std::convert::Infallible>(body)]);
    multer::Multipart::new(chunks, form.boundary().to_owned())
}

#[tokio::test]
async fn test_text_fields_roundtrip_through_multer() {
    init_tracing();

    let mut form = FormData::with_options(
        EncoderOptions::new(),
        &mut RandomBoundary::new(StdRng::seed_from_u64(1)),
    );
    form.append("latin", "José").unwrap();
    form.append("cyrillic", "Привет, мир").unwrap();
    form.append("cjk", "日本語のテキスト").unwrap();
    form.append("emoji", "🎉😀🚀").unwrap();

    let mut parser = multipart(&form);
    let mut seen = Vec::new();
    while let Some(field) = parser.next_field().await.unwrap() {
        let name = field.name().unwrap().to_owned();
        assert_eq!(field.content_type().map(|m| m.essence_str()), Some("text/plain"));
        let text = field.text().await.unwrap();
        seen.push((name, text));
    }

    assert_eq!(
        seen,
        vec![
            ("latin".to_owned(), "José".to_owned()),
            ("cyrillic".to_owned(), "Привет, мир".to_owned()),
            ("cjk".to_owned(), "日本語のテキスト".to_owned()),
            ("emoji".to_owned(), "🎉😀🚀".to_owned()),
        ]
    );
}

#[tokio::test]
async fn test_binary_file_roundtrip_through_multer() {
    init_tracing();

    // Content that looks like framing must survive untouched.
    let data: Vec<u8> = b"\r\n--not-the-boundary\r\n"
        .iter()
        .copied()
        .chain(0..=255u8)
        .collect();

    let mut form = FormData::new();
    form.append("caption", "a photo").unwrap();
    form.append(
        "photo",
        BinaryPayload::new(Bytes::from(data.clone()))
            .content_type("image/jpeg")
            .filename("photo.jpg"),
    )
    .unwrap();

    let mut parser = multipart(&form);

    let caption = parser.next_field().await.unwrap().unwrap();
    assert_eq!(caption.name(), Some("caption"));
    assert_eq!(caption.file_name(), None);
    assert_eq!(caption.text().await.unwrap(), "a photo");

    let photo = parser.next_field().await.unwrap().unwrap();
    assert_eq!(photo.name(), Some("photo"));
    assert_eq!(photo.file_name(), Some("photo.jpg"));
    assert_eq!(
        photo.content_type().map(|m| m.essence_str()),
        Some("image/jpeg")
    );
    assert_eq!(photo.bytes().await.unwrap(), Bytes::from(data));

    assert!(parser.next_field().await.unwrap().is_none());
}
