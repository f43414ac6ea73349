// src/templates.rs

//! Static template catalog: everything we write into a fresh project,
//! plus the webpack configuration generator and the dependency lists.
//! Generation is pure; nothing in here touches the console or the disk.

/// Typed options threaded through the generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateOptions {
  pub use_typescript: bool,
}

impl TemplateOptions {
  /// Extension for generated source files. All sources in one project
  /// use the same one; there is no mixed-extension output.
  pub fn source_extension(&self) -> &'static str {
    if self.use_typescript {
      "tsx"
    } else {
      "jsx"
    }
  }

  pub fn app_source(&self) -> &'static str {
    if self.use_typescript {
      APP_TSX
    } else {
      APP_JSX
    }
  }

  pub fn index_source(&self) -> &'static str {
    if self.use_typescript {
      INDEX_TSX
    } else {
      INDEX_JSX
    }
  }
}

/// Packages installed into every generated project, in install order.
pub const DEPENDENCIES: &[&str] = &[
  "react",
  "react-dom",
  "webpack",
  "webpack-cli",
  "webpack-dev-server",
  "babel-loader",
  "@babel/core",
  "@babel/preset-env",
  "@babel/preset-react",
  "style-loader",
  "css-loader",
];

/// Extra packages for the TypeScript variant. The generated webpack
/// configuration references ts-loader, so these are not optional there.
pub const TYPESCRIPT_DEPENDENCIES: &[&str] = &[
  "typescript",
  "ts-loader",
  "@types/react",
  "@types/react-dom",
];

pub fn dependency_names(options: &TemplateOptions) -> Vec<&'static str> {
  let mut names = DEPENDENCIES.to_vec();
  if options.use_typescript {
    names.extend_from_slice(TYPESCRIPT_DEPENDENCIES);
  }
  names
}

/// Selects between the two webpack configuration blobs. The variants
/// differ only in the entry-file extension and the loader rule set.
pub fn webpack_config(options: &TemplateOptions) -> &'static str {
  if options.use_typescript {
    WEBPACK_CONFIG_TS
  } else {
    WEBPACK_CONFIG_JS
  }
}

pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
	<head>
		<meta charset="utf-8" />
		<meta name="viewport" content="width=device-width, initial-scale=1" />
		<title>React App</title>
	</head>
	<body>
		<noscript>You need to enable JavaScript to run this app.</noscript>
		<div id="root"></div>
		<script src="/dist/bundle.js"></script>
	</body>
</html>
"#;

const APP_JSX: &str = r#"import React from "react";

const App = () => <h1>Hello, React!</h1>;

export default App;
"#;

const APP_TSX: &str = r#"import React from "react";

const App: React.FC = () => <h1>Hello, React!</h1>;

export default App;
"#;

const INDEX_JSX: &str = r#"import React from "react";
import ReactDOM from "react-dom";

import App from "./App";

ReactDOM.render(<App />, document.getElementById("root"));
"#;

const INDEX_TSX: &str = r#"import React from "react";
import ReactDOM from "react-dom";

import App from "./App";

ReactDOM.render(<App />, document.getElementById("root")!);
"#;

pub const BABELRC: &str = r#"{
	"presets": ["@babel/preset-env", "@babel/preset-react"]
}
"#;

pub const TSCONFIG: &str = r#"{
	"compilerOptions": {
		"outDir": "./dist/",
		"sourceMap": true,
		"noImplicitAny": true,
		"module": "es6",
		"moduleResolution": "node",
		"target": "es5",
		"jsx": "react",
		"allowJs": true,
		"esModuleInterop": true
	},
	"include": ["src"]
}
"#;

const WEBPACK_CONFIG_JS: &str = r#"const path = require("path");
const webpack = require("webpack");

module.exports = {
	entry: "./src/index.jsx",
	mode: "development",
	module: {
		rules: [
			{
				test: /\.(js|jsx)$/,
				exclude: /node_modules/,
				loader: "babel-loader",
				options: { presets: ["@babel/env"] },
			},
			{
				test: /\.css$/,
				use: ["style-loader", "css-loader"],
			},
		],
	},
	resolve: { extensions: [".css", ".js", ".jsx", ".ts", ".tsx"] },
	output: {
		path: path.resolve(__dirname, "dist/"),
		publicPath: "/dist/",
		filename: "bundle.js",
	},
	devServer: {
		static: {
			directory: path.join(__dirname, "public/"),
		},
		port: 3000,
		hot: true,
	},
	plugins: [new webpack.HotModuleReplacementPlugin()],
};
"#;

const WEBPACK_CONFIG_TS: &str = r#"const path = require("path");
const webpack = require("webpack");

module.exports = {
	entry: "./src/index.tsx",
	mode: "development",
	module: {
		rules: [
			{
				test: /\.(js|jsx)$/,
				exclude: /node_modules/,
				loader: "babel-loader",
				options: { presets: ["@babel/env"] },
			},
			{
				test: /\.(ts|tsx)$/,
				exclude: /node_modules/,
				loader: "ts-loader",
			},
			{
				test: /\.css$/,
				use: ["style-loader", "css-loader"],
			},
		],
	},
	resolve: { extensions: [".css", ".js", ".jsx", ".ts", ".tsx"] },
	output: {
		path: path.resolve(__dirname, "dist/"),
		publicPath: "/dist/",
		filename: "bundle.js",
	},
	devServer: {
		static: {
			directory: path.join(__dirname, "public/"),
		},
		port: 3000,
		hot: true,
	},
	plugins: [new webpack.HotModuleReplacementPlugin()],
};
"#;

#[cfg(test)]
mod tests {
  use super::*;

  const JS: TemplateOptions = TemplateOptions {
    use_typescript: false,
  };
  const TS: TemplateOptions = TemplateOptions {
    use_typescript: true,
  };

  #[test]
  fn source_extension_follows_the_flag() {
    assert_eq!(JS.source_extension(), "jsx");
    assert_eq!(TS.source_extension(), "tsx");
  }

  #[test]
  fn app_component_renders_a_fixed_heading() {
    assert!(JS.app_source().contains("<h1>Hello, React!</h1>"));
    assert!(TS.app_source().contains("<h1>Hello, React!</h1>"));
  }

  #[test]
  fn webpack_entry_matches_the_source_extension() {
    assert!(webpack_config(&JS).contains(r#"entry: "./src/index.jsx","#));
    assert!(webpack_config(&TS).contains(r#"entry: "./src/index.tsx","#));
  }

  #[test]
  fn webpack_variants_differ_only_in_entry_and_loader_rules() {
    let js_lines: Vec<&str> = webpack_config(&JS).lines().collect();
    let ts_lines: Vec<&str> = webpack_config(&TS).lines().collect();

    let only_in_ts: Vec<&&str> = ts_lines
      .iter()
      .filter(|line| !js_lines.contains(*line))
      .collect();
    assert!(!only_in_ts.is_empty());
    for line in only_in_ts {
      assert!(
        line.contains("index.tsx") || line.contains("ts|tsx") || line.contains("ts-loader"),
        "unexpected TypeScript-only line: {line}"
      );
    }

    let only_in_js: Vec<&&str> = js_lines
      .iter()
      .filter(|line| !ts_lines.contains(*line))
      .collect();
    for line in only_in_js {
      assert!(
        line.contains("index.jsx"),
        "unexpected JavaScript-only line: {line}"
      );
    }
  }

  #[test]
  fn webpack_generation_is_deterministic() {
    assert_eq!(webpack_config(&TS), webpack_config(&TS));
    assert_eq!(webpack_config(&JS), webpack_config(&JS));
  }

  #[test]
  fn typescript_dependency_list_extends_the_base_list_in_order() {
    let js_deps = dependency_names(&JS);
    let ts_deps = dependency_names(&TS);

    assert_eq!(js_deps, DEPENDENCIES.to_vec());
    assert_eq!(&ts_deps[..js_deps.len()], &js_deps[..]);
    assert_eq!(&ts_deps[js_deps.len()..], TYPESCRIPT_DEPENDENCIES);
    assert!(!js_deps.contains(&"typescript"));
    assert!(ts_deps.contains(&"ts-loader"));
  }
}
