//! Web target: `tsc --build`, `webpack`, then render `dist/` in a headless browser.
//!
//! The bundler runs ts-loader with `transpileOnly`, so a fixture can fail the typecheck and still
//! bundle and render.

use super::{BUILD_FAILS, BUILD_PASSES, TYPECHECK_FAILS, TYPECHECK_PASSES, renders, web};
use crate::{ELEMENT_NOT_FOUND, Scenario, Step};

const BASIC: &str = "Web: Basic";
const ENTRIES: &str = r#"Web: Toplevel variables are global without "import" or "export""#;
const CJS_UNTYPED_DEFAULT: &str = "Web: Import a CommonJS default object, without .d.ts";
const CJS_UNTYPED_NAMED: &str = "Web: Import a CommonJS named function, without .d.ts";
const CJS_TYPED_DEFAULT: &str = "Web: Import a CommonJS default object, with .d.ts";
const CJS_TYPED_NAMED: &str = "Web: Import a CommonJS named function, with .d.ts";
const ESM_DEFAULT: &str = "Web: Import an ES Module default object";
const ESM_NAMED: &str = "Web: Import an ES Module named function";
const PREACT: &str = "Web: Preact";
const JSON_ARRAY: &str = "Web: JSON Array";
const JSON_OBJECT: &str = "Web: JSON Object";
const ASSETS: &str = "Web: Assets";
const INCLUDE: &str = "Web: Include paths";
const NPM: &str = "Web: Include node_modules";

/// Typecheck passes, bundle builds, page renders `expected`.
const fn accepts(expected: &'static str) -> [Step; 3] {
    [TYPECHECK_PASSES, BUILD_PASSES, renders(expected)]
}

/// Typecheck fails, but the transpile-only bundle still builds and renders `expected`.
const fn transpiles(expected: &'static str) -> [Step; 3] {
    [TYPECHECK_FAILS, BUILD_PASSES, renders(expected)]
}

pub const WEB_SCENARIOS: &[Scenario] = &[
    // Basic
    web(BASIC, "Accepts: DOM", "basic-dom", &accepts("[BASIC DOM] Type is object")),
    web(BASIC, "Accepts: CSS Modules", "asset-import-css", &accepts("mymodule__myclass")),
    web(BASIC, "Accepts: local modules", "basic-local-modules", &accepts("[LOCAL MODULES] 123")),
    web(BASIC, "Accepts: relative path", "basic-relative-path", &accepts("[RELATIVE PATH] 123")),
    web(
        BASIC,
        "Accepts: relative path, index.ts",
        "basic-relative-path-index",
        &accepts("[RELATIVE PATH INDEX] 123"),
    ),
    web(
        BASIC,
        "Accepts: relative path, custom.ts, package.json",
        "basic-relative-path-package",
        &accepts("[RELATIVE PATH PACKAGE] 123"),
    ),
    // Entries
    web(
        ENTRIES,
        "Fails typecheck: global, no export or import",
        "entries",
        &transpiles(r#"[ENTRIES] Value is {"hello":"APP2"}"#),
    ),
    web(
        ENTRIES,
        "Fails typecheck: Global, require",
        "entries-require",
        &transpiles(r#"[ENTRIES REQUIRE] Value is {"hello":"APP2"}"#),
    ),
    web(
        ENTRIES,
        "Accepts: local, export {}",
        "entries-export",
        &accepts(r#"[ENTRIES EXPORT] Value is {"hello":"APP2"}"#),
    ),
    web(
        ENTRIES,
        "Accepts: local, import … from",
        "entries-import-from",
        &accepts(r#"[ENTRIES IMPORT FROM] Value is {"hello":"APP2"}"#),
    ),
    web(
        ENTRIES,
        "Accepts: local, import * from",
        "entries-import-star",
        &accepts(r#"[ENTRIES IMPORT STAR] Value is {"hello":"APP2"}"#),
    ),
    web(
        ENTRIES,
        "Fails typecheck: import = require",
        "entries-import-require",
        &transpiles(r#"[ENTRIES IMPORT REQUIRE] Value is {"hello":"APP2"}"#),
    ),
    // CommonJS default object, untyped
    web(
        CJS_UNTYPED_DEFAULT,
        "Fails typecheck: import … from",
        "commonjs-untyped-default-import-from",
        &transpiles("[COMMONJS UNTYPED DEFAULT, IMPORT FROM] Type is function"),
    ),
    web(
        CJS_UNTYPED_DEFAULT,
        "Fails typecheck: import * from",
        "commonjs-untyped-default-import-star",
        &transpiles("[COMMONJS UNTYPED DEFAULT, IMPORT STAR] Type is function"),
    ),
    web(
        CJS_UNTYPED_DEFAULT,
        "Fails typecheck: import = require",
        "commonjs-untyped-default-import-require",
        &transpiles("[COMMONJS UNTYPED DEFAULT, IMPORT REQUIRE] Type is undefined"),
    ),
    web(
        CJS_UNTYPED_DEFAULT,
        "Accepts: require",
        "commonjs-untyped-default-require",
        &accepts("[COMMONJS UNTYPED DEFAULT, REQUIRE] Type is function"),
    ),
    // CommonJS named function, untyped
    web(
        CJS_UNTYPED_NAMED,
        "Fails typecheck: import … from",
        "commonjs-untyped-named-import-from",
        &transpiles("[COMMONJS UNTYPED NAMED, IMPORT FROM] Type is function"),
    ),
    web(
        CJS_UNTYPED_NAMED,
        "Fails: import * from",
        "commonjs-untyped-named-import-star",
        &transpiles("[COMMONJS UNTYPED NAMED, IMPORT STAR] Type is function"),
    ),
    web(
        CJS_UNTYPED_NAMED,
        "Fails: import = require",
        "commonjs-untyped-named-import-require",
        &transpiles(ELEMENT_NOT_FOUND),
    ),
    web(
        CJS_UNTYPED_NAMED,
        "Accepts: require",
        "commonjs-untyped-named-require",
        &accepts("[COMMONJS UNTYPED NAMED, REQUIRE] Type is function"),
    ),
    // CommonJS default object, typed
    web(
        CJS_TYPED_DEFAULT,
        "Fails typecheck: import … from",
        "commonjs-typed-default-import-from",
        &transpiles("[COMMONJS TYPED DEFAULT, IMPORT FROM] Type is function"),
    ),
    web(
        CJS_TYPED_DEFAULT,
        "Fails typecheck: import * from",
        "commonjs-typed-default-import-star",
        &transpiles("[COMMONJS TYPED DEFAULT, IMPORT STAR] Type is function"),
    ),
    web(
        CJS_TYPED_DEFAULT,
        "Fails typecheck: import = require",
        "commonjs-typed-default-import-require",
        &transpiles("[COMMONJS TYPED DEFAULT, IMPORT REQUIRE] Type is undefined"),
    ),
    web(
        CJS_TYPED_DEFAULT,
        "Accepts: require",
        "commonjs-typed-default-require",
        &accepts("[COMMONJS TYPED DEFAULT, REQUIRE] Type is function"),
    ),
    // CommonJS named function, typed
    web(
        CJS_TYPED_NAMED,
        "Accepts: import … from",
        "commonjs-typed-named-import-from",
        &accepts("[COMMONJS TYPED NAMED, IMPORT FROM] Type is function"),
    ),
    web(
        CJS_TYPED_NAMED,
        "Accepts: import * from",
        "commonjs-typed-named-import-star",
        &accepts("[COMMONJS TYPED NAMED, IMPORT STAR] Type is function"),
    ),
    web(
        CJS_TYPED_NAMED,
        "Fails: import = require",
        "commonjs-typed-named-import-require",
        &transpiles(ELEMENT_NOT_FOUND),
    ),
    web(
        CJS_TYPED_NAMED,
        "Accepts: require",
        "commonjs-typed-named-require",
        &accepts("[COMMONJS TYPED NAMED, REQUIRE] Type is function"),
    ),
    // ES module default object
    web(
        ESM_DEFAULT,
        "Accepts: import … from",
        "export-default-import-from",
        &accepts(r#"[EXPORT DEFAULT, IMPORT FROM] Value is {"mynumber":123}"#),
    ),
    web(
        ESM_DEFAULT,
        "Accepts: import * from",
        "export-default-import-star",
        &accepts(r#"[EXPORT DEFAULT, IMPORT STAR] Value is {"default":{"mynumber":123}}"#),
    ),
    web(
        ESM_DEFAULT,
        "Fails: import = require",
        "export-default-import-require",
        &transpiles(ELEMENT_NOT_FOUND),
    ),
    web(
        ESM_DEFAULT,
        r#"Accepts: require (wrapped in "{default: THEMODULE}")"#,
        "export-default-require",
        &accepts(r#"[EXPORT DEFAULT, REQUIRE] Value is {"default":{"mynumber":123}}"#),
    ),
    // ES module named function
    web(
        ESM_NAMED,
        "Accepts: import … from",
        "export-named-import-from",
        &accepts("[EXPORT NAMED, IMPORT FROM] Type is function"),
    ),
    web(
        ESM_NAMED,
        "Accepts: import * from",
        "export-named-import-star",
        &accepts("[EXPORT NAMED, IMPORT STAR] Type is function"),
    ),
    web(ESM_NAMED, "Fails: import = require", "export-named-import-require", &transpiles(ELEMENT_NOT_FOUND)),
    web(
        ESM_NAMED,
        "Accepts: require",
        "export-named-require",
        &accepts("[EXPORT NAMED, REQUIRE] Type is function"),
    ),
    // Preact
    web(
        PREACT,
        "Accepts: h()",
        "preact-h",
        &accepts(r#"<article class="example">[PREACT H] Hello World</article>"#),
    ),
    web(
        PREACT,
        "Accepts: Class Component",
        "preact-class",
        &accepts(r#"<article class="example">[PREACT CLASS] PROP Hello World STATE 123</article>"#),
    ),
    web(
        PREACT,
        "Accepts: Functional Component",
        "preact-function",
        &accepts(r#"<article class="example">[PREACT FUNCTION] Hello World</article>"#),
    ),
    web(
        PREACT,
        "Accepts: TSX",
        "preact-tsx",
        &accepts(r#"<article class="example">[PREACT TSX] Hello World</article>"#),
    ),
    // JSON array
    web(
        JSON_ARRAY,
        "Fails typecheck: import … from",
        "json-array-import-from",
        &transpiles(r#"JSON ARRAY IMPORT FROM is ["hello","world"]"#),
    ),
    web(
        JSON_ARRAY,
        "Accepts: import * from",
        "json-array-import-star",
        &accepts(r#"JSON ARRAY IMPORT STAR is {"0":"hello","1":"world","length":2,"default":["hello","world"]}"#),
    ),
    web(JSON_ARRAY, "Fails: import = require", "json-array-import-require", &transpiles(ELEMENT_NOT_FOUND)),
    web(
        JSON_ARRAY,
        "Accepts: require",
        "json-array-require",
        &accepts(r#"JSON ARRAY REQUIRE is ["hello","world"]"#),
    ),
    // JSON object
    web(
        JSON_OBJECT,
        "Fails typecheck: import … from",
        "json-object-import-from",
        &transpiles(r#"JSON OBJECT IMPORT FROM is {"example":["hello","world"]}"#),
    ),
    web(
        JSON_OBJECT,
        "Accepts: import * from",
        "json-object-import-star",
        &accepts(r#"JSON OBJECT IMPORT STAR is {"example":["hello","world"],"default":{"example":["hello","world"]}}"#),
    ),
    web(JSON_OBJECT, "Fails: import = require", "json-object-import-require", &transpiles(ELEMENT_NOT_FOUND)),
    web(
        JSON_OBJECT,
        "Accepts: require",
        "json-object-require",
        &accepts(r#"JSON OBJECT REQUIRE is {"example":["hello","world"]}"#),
    ),
    // Assets (the literal URLs assume the default port)
    web(
        ASSETS,
        "Accepts: Image (url, resource)",
        "asset-url-image-resource",
        &accepts(concat!(
            r#"<div>"http://localhost:3000/assets/example1.jpg"</div>"#,
            r#"<div>"http://localhost:3000/assets/example2.png"</div>"#,
            r#"<div>"http://localhost:3000/assets/example3.svg"</div>"#,
        )),
    ),
    web(
        ASSETS,
        "Accepts: Image (url, inline)",
        "asset-url-image-inline",
        &accepts("<div>BASE64 true</div><div>BASE64 true</div><div>BASE64 true</div>"),
    ),
    web(
        ASSETS,
        "Accepts: Text (url, resource)",
        "asset-url-text-resource",
        &accepts(r#""http://localhost:3000/assets/example.txt""#),
    ),
    web(ASSETS, "Accepts: Text (url, inline)", "asset-url-text-inline", &accepts("BASE64 true")),
    web(
        ASSETS,
        "Accepts: Text (url, source)",
        "asset-url-text-source",
        &accepts(r#""http://localhost:3000/HELLO%20WORLD""#),
    ),
    web(
        ASSETS,
        "Accepts: Text (import, resource)",
        "asset-import-text-resource",
        &accepts(r#"<div>{"default":"/assets/example1.txt"}</div><div>"/assets/example2.txt"</div>"#),
    ),
    web(
        ASSETS,
        "Accepts: Text (import, inline)",
        "asset-import-text-inline",
        &accepts("<div>BASE64 true</div><div>BASE64 true</div>"),
    ),
    web(
        ASSETS,
        "Accepts: Text (import, source)",
        "asset-import-text-source",
        &accepts(r#"<div>{"default":"HELLO WORLD\n"}</div><div>"HELLO WORLD\n"</div>"#),
    ),
    // Include paths
    web(INCLUDE, "Accepts: src, no include", "include-src-default", &accepts("[INCLUDE SRC DEFAULT] Type is object")),
    web(INCLUDE, "Accepts: src, inside include", "include-src-inside", &accepts("[INCLUDE SRC INSIDE] Type is object")),
    web(INCLUDE, "Fails: src, outside include", "include-src-outside", &[TYPECHECK_FAILS, BUILD_FAILS]),
    web(
        INCLUDE,
        "Accepts: custom path, no include",
        "include-custom-default",
        &accepts("[INCLUDE CUSTOM DEFAULT] Type is object"),
    ),
    web(
        INCLUDE,
        "Accepts: custom path, inside include",
        "include-custom-inside",
        &accepts("[INCLUDE CUSTOM INSIDE] Type is object"),
    ),
    web(
        INCLUDE,
        "Accepts: custom path, outside include",
        "include-custom-outside",
        &accepts("[INCLUDE CUSTOM OUTSIDE] Type is object"),
    ),
    // node_modules includes
    web(
        NPM,
        "Accepts: TS index, no include",
        "npm-ts-index-default",
        &accepts("[NPM TS INDEX DEFAULT] Value is 111"),
    ),
    web(
        NPM,
        "Accepts: TS index.ts, inside list",
        "npm-ts-index-inside",
        &accepts("[NPM TS INDEX INSIDE] Value is 111"),
    ),
    web(
        NPM,
        "Accepts: TS index.ts, outside list",
        "npm-ts-index-outside",
        &accepts("[NPM TS INDEX OUTSIDE] Value is 111"),
    ),
    web(
        NPM,
        "Accepts: TS package.json, JS index, no include",
        "npm-ts-package-default",
        &accepts("[NPM TS PACKAGE DEFAULT] Value is 111"),
    ),
    web(
        NPM,
        "Accepts: TS package.json, inside list",
        "npm-ts-package-inside",
        &accepts("[NPM TS PACKAGE INSIDE] Value is 111"),
    ),
    web(
        NPM,
        "Accepts: TS package.json, outside list",
        "npm-ts-package-outside",
        &accepts("[NPM TS PACKAGE OUTSIDE] Value is 111"),
    ),
    web(
        NPM,
        "Accepts: TS index, JS index, no include",
        "npm-ts-index-js-index-default",
        &accepts("[NPM TS INDEX JS INDEX DEFAULT] Value is 111 222"),
    ),
    web(
        NPM,
        "Accepts: TS index inside, JS index inside",
        "npm-ts-index-inside-js-index-inside",
        &accepts("[NPM TS INDEX INSIDE JS INDEX INSIDE] Value is 111 222"),
    ),
    web(
        NPM,
        "Accepts: TS index outside, JS index inside",
        "npm-ts-index-outside-js-index-inside",
        &accepts("[NPM TS INDEX OUTSIDE JS INDEX INSIDE] Value is 111 222"),
    ),
];
