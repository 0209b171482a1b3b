//! Node target: `tsc --build` then `node out/...`.

use super::{MAIN_JS, SRC_MAIN_JS, TYPECHECK_FAILS, TYPECHECK_PASSES, copy, crashes, node, runs};
use crate::{Scenario, Step};

const BASIC: &str = "Node: Basic";
const JSON: &str = "Node: JSON";
const CJS_UNTYPED_DEFAULT: &str = "Node: Import a CommonJS default object, without .d.ts";
const CJS_UNTYPED_NAMED: &str = "Node: Import a CommonJS named function, without .d.ts";
const CJS_TYPED_DEFAULT: &str = "Node: Import a CommonJS default object, with .d.ts";
const CJS_TYPED_NAMED: &str = "Node: Import a CommonJS named function, with .d.ts";
const ESM_DEFAULT: &str = "Node: Import an ES Module default object";
const ESM_NAMED: &str = "Node: Import an ES Module named function";
const CLASS: &str = "Node: Class & Properties";
const INCLUDE: &str = "Node: Include";
const NPM: &str = "Node: Include node_modules";

// tsc never emits hand-written JavaScript or package manifests next to the compiled output.
const COPY_UNTYPED_INDEX: Step = copy("src/mymodule/index.js", "out/mymodule/index.js");
const COPY_TYPED_MANIFEST: Step = copy("src/mymodule/package.json", "out/mymodule/package.json");
const COPY_TYPED_MODULE: Step = copy("src/mymodule/mymodule.js", "out/mymodule/mymodule.js");

pub const NODE_SCENARIOS: &[Scenario] = &[
    // Basic
    node(BASIC, "Accepts: cli", "basic-cli", &[TYPECHECK_PASSES, runs(MAIN_JS, &["[CLI] Hello World"])]),
    node(BASIC, "Fails: local modules", "basic-local-modules", &[TYPECHECK_PASSES, crashes(MAIN_JS)]),
    node(
        BASIC,
        "Accepts: relative path",
        "basic-relative-path",
        &[TYPECHECK_PASSES, runs(MAIN_JS, &["[RELATIVE PATH] 123"])],
    ),
    node(
        BASIC,
        "Accepts: relative path, index.ts",
        "basic-relative-path-index",
        &[TYPECHECK_PASSES, runs(MAIN_JS, &["[RELATIVE PATH INDEX] 123"])],
    ),
    node(
        BASIC,
        "Fails: relative path, custom.ts, package.json",
        "basic-relative-path-package",
        &[TYPECHECK_PASSES, crashes(MAIN_JS)],
    ),
    // JSON
    node(JSON, "Fails: import from", "json-array-import-from", &[TYPECHECK_FAILS]),
    node(
        JSON,
        "Accepts: import * from",
        "json-array-import-star",
        &[TYPECHECK_PASSES, runs(MAIN_JS, &[r#"[JSON ARRAY IMPORT STAR] is ["hello","world"]"#])],
    ),
    node(
        JSON,
        "Accepts: import = require",
        "json-array-import-require",
        &[TYPECHECK_PASSES, runs(MAIN_JS, &[r#"[JSON ARRAY IMPORT REQUIRE] is ["hello","world"]"#])],
    ),
    node(
        JSON,
        "Fails: require (without copy)",
        "json-array-require",
        &[TYPECHECK_PASSES, crashes(MAIN_JS)],
    ),
    node(
        JSON,
        "Accepts: require (with copy)",
        "json-array-require",
        &[
            TYPECHECK_PASSES,
            copy("src/data.json", "out/data.json"),
            runs(MAIN_JS, &[r#"[JSON ARRAY REQUIRE] is ["hello","world"]"#]),
        ],
    ),
    // CommonJS default object, untyped
    node(CJS_UNTYPED_DEFAULT, "Fails: import … from", "commonjs-untyped-default-import-from", &[TYPECHECK_FAILS]),
    node(CJS_UNTYPED_DEFAULT, "Fails: import * from", "commonjs-untyped-default-import-star", &[TYPECHECK_FAILS]),
    node(
        CJS_UNTYPED_DEFAULT,
        "Fails: import = require",
        "commonjs-untyped-default-import-require",
        &[TYPECHECK_FAILS],
    ),
    node(
        CJS_UNTYPED_DEFAULT,
        "Accepts: require",
        "commonjs-untyped-default-require",
        &[
            TYPECHECK_PASSES,
            COPY_UNTYPED_INDEX,
            runs(MAIN_JS, &["[COMMONJS UNTYPED DEFAULT, REQUIRE] Type is function"]),
        ],
    ),
    // CommonJS named function, untyped
    node(CJS_UNTYPED_NAMED, "Fails: import … from", "commonjs-untyped-named-import-from", &[TYPECHECK_FAILS]),
    node(CJS_UNTYPED_NAMED, "Fails: import * from", "commonjs-untyped-named-import-star", &[TYPECHECK_FAILS]),
    node(
        CJS_UNTYPED_NAMED,
        "Fails: import = require",
        "commonjs-untyped-named-import-require",
        &[TYPECHECK_FAILS],
    ),
    node(
        CJS_UNTYPED_NAMED,
        "Accepts: require",
        "commonjs-untyped-named-require",
        &[
            TYPECHECK_PASSES,
            COPY_UNTYPED_INDEX,
            runs(MAIN_JS, &["[COMMONJS UNTYPED NAMED, REQUIRE] Type is function"]),
        ],
    ),
    // CommonJS default object, typed
    node(CJS_TYPED_DEFAULT, "Fails: import … from", "commonjs-typed-default-import-from", &[TYPECHECK_FAILS]),
    node(CJS_TYPED_DEFAULT, "Fails: import * from", "commonjs-typed-default-import-star", &[TYPECHECK_FAILS]),
    node(
        CJS_TYPED_DEFAULT,
        "Accepts: import = require",
        "commonjs-typed-default-import-require",
        &[
            TYPECHECK_PASSES,
            COPY_TYPED_MANIFEST,
            COPY_TYPED_MODULE,
            runs(MAIN_JS, &["[COMMONJS TYPED DEFAULT, IMPORT REQUIRE] Type is function"]),
        ],
    ),
    node(
        CJS_TYPED_DEFAULT,
        "Accepts: require",
        "commonjs-typed-default-require",
        &[
            TYPECHECK_PASSES,
            COPY_TYPED_MANIFEST,
            COPY_TYPED_MODULE,
            runs(MAIN_JS, &["[COMMONJS TYPED DEFAULT, REQUIRE] Type is function"]),
        ],
    ),
    // CommonJS named function, typed
    node(
        CJS_TYPED_NAMED,
        "Accepts: import … from",
        "commonjs-typed-named-import-from",
        &[
            TYPECHECK_PASSES,
            COPY_TYPED_MANIFEST,
            COPY_TYPED_MODULE,
            runs(MAIN_JS, &["[COMMONJS TYPED NAMED, IMPORT FROM] Type is function"]),
        ],
    ),
    node(
        CJS_TYPED_NAMED,
        "Accepts: import * from",
        "commonjs-typed-named-import-star",
        &[
            TYPECHECK_PASSES,
            COPY_TYPED_MANIFEST,
            COPY_TYPED_MODULE,
            runs(MAIN_JS, &["[COMMONJS TYPED NAMED, IMPORT STAR] Type is function"]),
        ],
    ),
    node(
        CJS_TYPED_NAMED,
        "Accepts: import = require",
        "commonjs-typed-named-import-require",
        &[
            TYPECHECK_PASSES,
            COPY_TYPED_MANIFEST,
            COPY_TYPED_MODULE,
            runs(MAIN_JS, &["[COMMONJS TYPED NAMED, IMPORT REQUIRE] Type is function"]),
        ],
    ),
    node(
        CJS_TYPED_NAMED,
        "Accepts: require",
        "commonjs-typed-named-require",
        &[
            TYPECHECK_PASSES,
            COPY_TYPED_MANIFEST,
            COPY_TYPED_MODULE,
            runs(MAIN_JS, &["[COMMONJS TYPED NAMED, REQUIRE] Type is function"]),
        ],
    ),
    // ES module default object
    node(
        ESM_DEFAULT,
        "Accepts: import … from",
        "export-default-import-from",
        &[TYPECHECK_PASSES, runs(MAIN_JS, &[r#"[EXPORT DEFAULT, IMPORT FROM] Value is {"mynumber":123}"#])],
    ),
    node(
        ESM_DEFAULT,
        "Accepts: import * from",
        "export-default-import-star",
        &[
            TYPECHECK_PASSES,
            runs(MAIN_JS, &[r#"[EXPORT DEFAULT, IMPORT STAR] Value is {"default":{"mynumber":123}}"#]),
        ],
    ),
    node(
        ESM_DEFAULT,
        "Accepts: import = require",
        "export-default-import-require",
        &[
            TYPECHECK_PASSES,
            runs(MAIN_JS, &[r#"[EXPORT DEFAULT, IMPORT REQUIRE] Value is {"default":{"mynumber":123}}"#]),
        ],
    ),
    node(
        ESM_DEFAULT,
        r#"Accepts: require (wrapped in "{default: THEMODULE}")"#,
        "export-default-require",
        &[
            TYPECHECK_PASSES,
            runs(MAIN_JS, &[r#"[EXPORT DEFAULT, REQUIRE] Value is {"default":{"mynumber":123}}"#]),
        ],
    ),
    // ES module named function
    node(
        ESM_NAMED,
        "Accepts: import … from",
        "export-named-import-from",
        &[TYPECHECK_PASSES, runs(MAIN_JS, &["[EXPORT NAMED, IMPORT FROM] Type is function"])],
    ),
    node(
        ESM_NAMED,
        "Accepts: import * from",
        "export-named-import-star",
        &[TYPECHECK_PASSES, runs(MAIN_JS, &["[EXPORT NAMED, IMPORT STAR] Type is function"])],
    ),
    node(
        ESM_NAMED,
        "Accepts: import = require",
        "export-named-import-require",
        &[TYPECHECK_PASSES, runs(MAIN_JS, &["[EXPORT NAMED, IMPORT REQUIRE] Type is function"])],
    ),
    node(
        ESM_NAMED,
        "Accepts: require",
        "export-named-require",
        &[TYPECHECK_PASSES, runs(MAIN_JS, &["[EXPORT NAMED, REQUIRE] Type is function"])],
    ),
    // Class properties (strictPropertyInitialization)
    node(CLASS, "Fails: public property, not initialized", "class-not-initialized", &[TYPECHECK_FAILS]),
    node(
        CLASS,
        "Accepts: public property, initialized",
        "class-initialized",
        &[TYPECHECK_PASSES, runs(MAIN_JS, &["[CLASS INITIALIZED] number"])],
    ),
    node(
        CLASS,
        "Accepts: public property, constructor",
        "class-constructor-property-not-initialized",
        &[TYPECHECK_PASSES, runs(MAIN_JS, &["[CLASS CONSTRUCTOR PROPERTY NOT INITIALIZED] number"])],
    ),
    node(
        CLASS,
        "Accepts: public property, initialized, constructor",
        "class-constructor-property-initialized",
        &[TYPECHECK_PASSES, runs(MAIN_JS, &["[CLASS CONSTRUCTOR PROPERTY INITIALIZED] number"])],
    ),
    node(
        CLASS,
        "Accepts: public property, generic type, constructor",
        "class-generic-property-constructor",
        &[TYPECHECK_PASSES, runs(MAIN_JS, &["[CLASS GENERIC PROPERTY CONSTRUCTOR] number"])],
    ),
    node(
        CLASS,
        "Fails: public property, generic type, not initialized",
        "class-generic-property-not-initialized",
        &[TYPECHECK_FAILS],
    ),
    node(
        CLASS,
        "Accepts: private property, getter setter, constructor",
        "class-getter-setter-constructor",
        &[TYPECHECK_PASSES, runs(MAIN_JS, &["[CLASS GETTER SETTER CONSTRUCTOR] number"])],
    ),
    node(
        CLASS,
        "Accepts: private property, getter setter, initialized",
        "class-getter-setter-initialized",
        &[TYPECHECK_PASSES, runs(MAIN_JS, &["[CLASS GETTER SETTER INITIALIZED] number"])],
    ),
    node(
        CLASS,
        "Fails: private property, getter setter, not initialized",
        "class-getter-setter-not-initialized",
        &[TYPECHECK_FAILS],
    ),
    node(
        CLASS,
        "Accepts: public property, optional, initialized",
        "class-optional-property-initialized",
        &[TYPECHECK_PASSES, runs(MAIN_JS, &["[CLASS OPTIONAL PROPERTY INITIALIZED] number"])],
    ),
    node(
        CLASS,
        "Accepts: public property, optional, initialized, constructor",
        "class-optional-property-initialized-constructor",
        &[TYPECHECK_PASSES, runs(MAIN_JS, &["[CLASS OPTIONAL PROPERTY INITIALIZED CONSTRUCTOR] number"])],
    ),
    node(
        CLASS,
        "Accepts: public property, optional",
        "class-optional-property-not-initialized",
        &[TYPECHECK_PASSES, runs(MAIN_JS, &["[CLASS OPTIONAL PROPERTY NOT INITIALIZED] undefined"])],
    ),
    node(
        CLASS,
        "Accepts: public property, optional, constructor",
        "class-optional-property-not-initialized-constructor",
        &[TYPECHECK_PASSES, runs(MAIN_JS, &["[CLASS OPTIONAL PROPERTY NOT INITIALIZED CONSTRUCTOR] number"])],
    ),
    // Include lists
    node(
        INCLUDE,
        "Accepts: custom path, default list",
        "include-default",
        &[TYPECHECK_PASSES, runs(MAIN_JS, &["[INCLUDE CUSTOM DEFAULT] Hello World"])],
    ),
    node(
        INCLUDE,
        "Accepts: custom path, inside list",
        "include-inside",
        &[TYPECHECK_PASSES, runs(MAIN_JS, &["[INCLUDE CUSTOM INSIDE] Hello World"])],
    ),
    node(INCLUDE, "Fails: custom path, outside list", "include-outside", &[TYPECHECK_FAILS]),
    // node_modules includes
    node(NPM, "Fails: TS index, JS index, no include", "npm-ts-index-default", &[TYPECHECK_PASSES, crashes(MAIN_JS)]),
    node(
        NPM,
        "Accepts: TS index.ts, inside list",
        "npm-ts-index-inside",
        &[TYPECHECK_PASSES, runs(SRC_MAIN_JS, &["[NPM TS INDEX INSIDE] Value is 111"])],
    ),
    node(NPM, "Fails: TS index.ts, outside list", "npm-ts-index-outside", &[TYPECHECK_PASSES, crashes(MAIN_JS)]),
    node(
        NPM,
        "Fails: TS package.json, JS index, no include",
        "npm-ts-package-default",
        &[TYPECHECK_PASSES, crashes(MAIN_JS)],
    ),
    node(
        NPM,
        "Fails: TS package.json, inside list",
        "npm-ts-package-inside",
        &[TYPECHECK_PASSES, crashes(SRC_MAIN_JS)],
    ),
    node(
        NPM,
        "Fails: TS package.json, outside list",
        "npm-ts-package-outside",
        &[TYPECHECK_PASSES, crashes(MAIN_JS)],
    ),
    node(
        NPM,
        "Fails: TS index, JS index, no include (with JS index)",
        "npm-ts-index-js-index-default",
        &[TYPECHECK_PASSES, crashes(MAIN_JS)],
    ),
    node(
        NPM,
        "Accepts: TS index inside, JS index inside",
        "npm-ts-index-inside-js-index-inside",
        &[TYPECHECK_PASSES, runs(SRC_MAIN_JS, &["[NPM TS INDEX INSIDE JS INDEX INSIDE] Value is 111 222"])],
    ),
    node(
        NPM,
        "Fails: TS index outside, JS index inside",
        "npm-ts-index-outside-js-index-inside",
        &[TYPECHECK_PASSES, crashes(MAIN_JS)],
    ),
];
