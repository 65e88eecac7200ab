use super::*;

// -----------------------------------------------------------------------
// Placeholders
// -----------------------------------------------------------------------

#[test]
fn empty_value_gets_no_image_placeholder() {
    assert_eq!(normalize_image_reference(""), NO_IMAGE_PLACEHOLDER);
    assert_eq!(normalize_image_reference("   "), NO_IMAGE_PLACEHOLDER);
    assert_eq!(normalize_image_reference("\"\""), NO_IMAGE_PLACEHOLDER);
}

#[test]
fn imgur_album_gets_album_placeholder() {
    assert_eq!(
        normalize_image_reference("https://imgur.com/a/Xyz789"),
        ALBUM_PLACEHOLDER
    );
    assert_eq!(
        normalize_image_reference("imgur.com/a/Xyz789"),
        ALBUM_PLACEHOLDER
    );
}

#[test]
fn non_url_gets_invalid_placeholder() {
    assert_eq!(normalize_image_reference("foto.jpg"), INVALID_URL_PLACEHOLDER);
    assert_eq!(
        normalize_image_reference("sem foto ainda"),
        INVALID_URL_PLACEHOLDER
    );
    assert_eq!(
        normalize_image_reference("ftp://files.example.com/a.jpg"),
        INVALID_URL_PLACEHOLDER
    );
}

#[test]
fn bare_scheme_gets_invalid_placeholder() {
    assert_eq!(normalize_image_reference("https://"), INVALID_URL_PLACEHOLDER);
    assert_eq!(normalize_image_reference("http"), INVALID_URL_PLACEHOLDER);
}

// -----------------------------------------------------------------------
// Imgur
// -----------------------------------------------------------------------

#[test]
fn imgur_short_link_is_rewritten_to_direct_jpg() {
    assert_eq!(
        normalize_image_reference("https://imgur.com/abc123"),
        "https://i.imgur.com/abc123.jpg"
    );
}

#[test]
fn imgur_short_link_drops_query_string() {
    assert_eq!(
        normalize_image_reference("https://imgur.com/p8jsjyx?source=share"),
        "https://i.imgur.com/p8jsjyx.jpg"
    );
}

#[test]
fn imgur_short_link_without_scheme_is_rewritten() {
    assert_eq!(
        normalize_image_reference("imgur.com/p8jsjyx"),
        "https://i.imgur.com/p8jsjyx.jpg"
    );
}

#[test]
fn imgur_gallery_link_uses_final_segment() {
    assert_eq!(
        normalize_image_reference("https://imgur.com/gallery/Qw3rTy"),
        "https://i.imgur.com/Qw3rTy.jpg"
    );
}

#[test]
fn imgur_short_link_keeps_non_alphanumeric_id() {
    assert_eq!(
        normalize_image_reference("imgur.com/abc-def"),
        "https://i.imgur.com/abc-def.jpg"
    );
    assert_eq!(
        normalize_image_reference("https://imgur.com/abc_1?x=y"),
        "https://i.imgur.com/abc_1.jpg"
    );
}

#[test]
fn imgur_root_without_id_is_invalid() {
    assert_eq!(
        normalize_image_reference("https://imgur.com/"),
        INVALID_URL_PLACEHOLDER
    );
}

#[test]
fn imgur_direct_link_passes_through() {
    let direct = "https://i.imgur.com/abc123.png";
    assert_eq!(normalize_image_reference(direct), direct);
}

#[test]
fn imgur_direct_link_without_scheme_gets_https() {
    assert_eq!(
        normalize_image_reference("i.imgur.com/abc123.png"),
        "https://i.imgur.com/abc123.png"
    );
}

#[test]
fn imgur_direct_link_with_space_is_percent_encoded() {
    assert_eq!(
        normalize_image_reference("i.imgur.com/a b.jpg"),
        "https://i.imgur.com/a%20b.jpg"
    );
}

// -----------------------------------------------------------------------
// Google Drive
// -----------------------------------------------------------------------

#[test]
fn drive_share_link_is_rewritten() {
    assert_eq!(
        normalize_image_reference("https://drive.google.com/file/d/XYZ123/view"),
        "https://drive.google.com/uc?id=XYZ123"
    );
}

#[test]
fn drive_share_link_keeps_dashes_and_underscores() {
    assert_eq!(
        normalize_image_reference(
            "https://drive.google.com/file/d/1a-B_c2D/view?usp=sharing"
        ),
        "https://drive.google.com/uc?id=1a-B_c2D"
    );
}

#[test]
fn drive_link_without_file_id_passes_through() {
    let link = "https://drive.google.com/open?id=XYZ123";
    assert_eq!(normalize_image_reference(link), link);
}

// -----------------------------------------------------------------------
// Pass-through and totality
// -----------------------------------------------------------------------

#[test]
fn other_absolute_urls_pass_through() {
    let link = "https://cdn.example.com/products/ssd.webp";
    assert_eq!(normalize_image_reference(link), link);
}

#[test]
fn pass_through_returns_serialized_url() {
    assert_eq!(
        normalize_image_reference("https://cdn.example.com/my photo.png"),
        "https://cdn.example.com/my%20photo.png"
    );
}

#[test]
fn surrounding_quotes_and_whitespace_are_stripped() {
    assert_eq!(
        normalize_image_reference("  \"https://imgur.com/abc123\" "),
        "https://i.imgur.com/abc123.jpg"
    );
}

#[test]
fn mentioning_imgur_in_a_query_does_not_trigger_rewrite() {
    let link = "https://cdn.example.com/img.png?ref=imgur.com/abc";
    assert_eq!(normalize_image_reference(link), link);
}

#[test]
fn output_is_never_empty_and_always_http() {
    let inputs = [
        "",
        " ",
        "\"",
        "x",
        "://",
        "https://imgur.com/a/",
        "imgur.com",
        "drive.google.com/file/d/",
        "javascript:alert(1)",
        "data:image/png;base64,AAAA",
        "ção",
        "https://exa mple.com/a.png",
    ];
    for input in inputs {
        let out = normalize_image_reference(input);
        assert!(!out.is_empty(), "empty output for {input:?}");
        assert!(
            Url::parse(&out).is_ok_and(|u| u.scheme() == "https" || u.scheme() == "http"),
            "output {out:?} for {input:?} is not an http(s) URL"
        );
    }
}
