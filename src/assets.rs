// src/assets.rs
//! Fixed placeholder content packed into the archive
//!
//! Every byte that ends up in the `.apk` is defined here. Nothing read at
//! runtime changes what gets written.

/// Workspace-relative path of the landing page
pub const INDEX_HTML_PATH: &str = "index.html";
/// Workspace-relative path of the web app manifest
pub const MANIFEST_JSON_PATH: &str = "manifest.json";
/// Workspace-relative path of the fake signature manifest
pub const SIGNATURE_MANIFEST_PATH: &str = "META-INF/MANIFEST.MF";
/// Workspace-relative path of the icon
pub const ICON_PNG_PATH: &str = "icon.png";

/// Entry names a complete placeholder archive contains
pub const EXPECTED_ENTRIES: [&str; 4] = [
    INDEX_HTML_PATH,
    MANIFEST_JSON_PATH,
    SIGNATURE_MANIFEST_PATH,
    ICON_PNG_PATH,
];

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>报告系统 APK 演示</title>
    <style>
        body {
            font-family: Arial, sans-serif;
            margin: 0;
            padding: 20px;
            background-color: #f0f0f0;
            color: #333;
        }
        .container {
            max-width: 600px;
            margin: 0 auto;
            background: white;
            padding: 20px;
            border-radius: 8px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }
        h1 {
            color: #4285f4;
        }
        .logo {
            text-align: center;
            margin-bottom: 20px;
        }
        .footer {
            margin-top: 30px;
            text-align: center;
            font-size: 12px;
            color: #666;
        }
    </style>
</head>
<body>
    <div class="container">
        <div class="logo">
            <h1>报告系统</h1>
        </div>
        <h2>演示APK包</h2>
        <p>这是一个演示APK文件，用于测试GitHub仓库中的下载功能。</p>
        <p>实际的APK文件将由PWABuilder生成，并替换此演示文件。</p>
        <h3>如何获取真实APK:</h3>
        <ol>
            <li>访问: https://bananamax9113.github.io/report-system-app/</li>
            <li>使用PWABuilder生成Android APK</li>
            <li>替换GitHub仓库中的演示APK文件</li>
        </ol>
        <div class="footer">
            &copy; 2023 报告系统 - 版本 1.0.0
        </div>
    </div>
</body>
</html>
"#;

const MANIFEST_JSON: &str = r##"{
  "name": "报告系统",
  "short_name": "报告系统",
  "description": "专业的报告管理系统，支持PDF生成、图片管理、数据存储、报告导出等功能",
  "start_url": "/",
  "display": "standalone",
  "background_color": "#ffffff",
  "theme_color": "#4285f4",
  "icons": [
    {
      "src": "icon.png",
      "sizes": "192x192",
      "type": "image/png"
    }
  ]
}
"##;

const SIGNATURE_MANIFEST: &str = "Manifest-Version: 1.0\nCreated-By: 1.0 (报告系统)\n";

/// Minimal valid PNG: 1x1, 8-bit RGBA, fully transparent
pub const ICON_PNG: [u8; 67] = [
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, // signature
    0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44, 0x52, // IHDR
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00,
    0x1f, 0x15, 0xc4, 0x89,
    0x00, 0x00, 0x00, 0x0a, 0x49, 0x44, 0x41, 0x54, // IDAT
    0x78, 0x9c, 0x63, 0x00, 0x01, 0x00, 0x00, 0x05, 0x00, 0x01,
    0x0d, 0x0a, 0x2d, 0xb4,
    0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4e, 0x44, // IEND
    0xae, 0x42, 0x60, 0x82,
];

/// A file written into the workspace before archival
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderAsset {
    /// Path relative to the workspace root, `/`-separated
    pub path: &'static str,
    /// Exact file contents
    pub contents: &'static [u8],
}

impl PlaceholderAsset {
    /// Size of the contents in bytes
    pub fn size(&self) -> u64 {
        self.contents.len() as u64
    }
}

/// The four placeholder files, in write order
pub fn placeholder_assets() -> [PlaceholderAsset; 4] {
    [
        PlaceholderAsset {
            path: INDEX_HTML_PATH,
            contents: INDEX_HTML.as_bytes(),
        },
        PlaceholderAsset {
            path: MANIFEST_JSON_PATH,
            contents: MANIFEST_JSON.as_bytes(),
        },
        PlaceholderAsset {
            path: SIGNATURE_MANIFEST_PATH,
            contents: SIGNATURE_MANIFEST.as_bytes(),
        },
        PlaceholderAsset {
            path: ICON_PNG_PATH,
            contents: &ICON_PNG,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_paths_match_expected_entries() {
        let paths: Vec<&str> = placeholder_assets().iter().map(|a| a.path).collect();
        assert_eq!(paths, EXPECTED_ENTRIES);
    }

    #[test]
    fn test_manifest_json_is_valid() {
        let value: serde_json::Value = serde_json::from_str(MANIFEST_JSON).unwrap();
        assert_eq!(value["display"], "standalone");
        assert_eq!(value["start_url"], "/");
        assert_eq!(value["icons"][0]["src"], ICON_PNG_PATH);
        assert_eq!(value["icons"][0]["type"], "image/png");
    }

    #[test]
    fn test_signature_manifest_header() {
        assert!(SIGNATURE_MANIFEST.starts_with("Manifest-Version: 1.0\n"));
        assert!(SIGNATURE_MANIFEST.ends_with('\n'));
    }

    #[test]
    fn test_index_html_is_utf8_document() {
        assert!(INDEX_HTML.starts_with("<!DOCTYPE html>"));
        assert!(INDEX_HTML.contains(r#"<meta charset="UTF-8">"#));
        assert!(INDEX_HTML.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_icon_size() {
        let icon = placeholder_assets()[3];
        assert_eq!(icon.size(), 67);
        assert_eq!(icon.contents, &ICON_PNG[..]);
    }
}
