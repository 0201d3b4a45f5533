//! index.js bootstrap emitter.
//!
//! The bootstrap is an express-based HTTP adapter that translates inbound
//! requests into the `(event, context)` function-invocation contract. It is
//! emitted as static text; only the handler require path is parameterized.

use std::path::{Path, PathBuf};

use faasgen_core::{GeneratedFile, Overwrite};

/// The HTTP bootstrap script at the output root, managed by the watchdog.
pub struct IndexJs {
    func_dir: String,
    func_handler: String,
}

impl IndexJs {
    pub fn new(func_dir: impl Into<String>, func_handler: impl Into<String>) -> Self {
        Self {
            func_dir: func_dir.into(),
            func_handler: func_handler.into(),
        }
    }

    /// Module path for `require`, without the `.js` suffix node resolves on
    /// its own.
    fn handler_module(&self) -> String {
        let stem = self
            .func_handler
            .strip_suffix(".js")
            .unwrap_or(&self.func_handler);
        format!("./{}/{}", self.func_dir, stem)
    }
}

impl GeneratedFile for IndexJs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("index.js")
    }

    fn overwrite(&self) -> Overwrite {
        Overwrite::IfMissing
    }

    fn render(&self) -> String {
        format!(
            "{PRELUDE}const handler = require('{module}');\n{ADAPTER}",
            module = self.handler_module()
        )
    }
}

const PRELUDE: &str = r#"// Copyright (c) Alex Ellis 2017. All rights reserved.
// Copyright (c) OpenFaaS Author(s) 2020. All rights reserved.
// Licensed under the MIT license. See LICENSE file in the project root for full license information.

"use strict"

const express = require('express')
const app = express()
"#;

const ADAPTER: &str = r#"const bodyParser = require('body-parser')

if (process.env.RAW_BODY === 'true') {
    app.use(bodyParser.raw({ type: '*/*' }))
} else {
    var jsonLimit = process.env.MAX_JSON_SIZE || '100kb' //body-parser default
    app.use(bodyParser.json({ limit: jsonLimit}));
    app.use(bodyParser.raw()); // "Content-Type: application/octet-stream"
    app.use(bodyParser.text({ type : "text/*" }));
}

app.disable('x-powered-by');

class FunctionEvent {
    constructor(req) {
        this.body = req.body;
        this.headers = req.headers;
        this.method = req.method;
        this.query = req.query;
        this.path = req.path;
    }
}

class FunctionContext {
    constructor(cb) {
        this.value = 200;
        this.cb = cb;
        this.headerValues = {};
        this.cbCalled = 0;
    }

    status(value) {
        if(!value) {
            return this.value;
        }

        this.value = value;
        return this;
    }

    headers(value) {
        if(!value) {
            return this.headerValues;
        }

        this.headerValues = value;
        return this;
    }

    succeed(value) {
        let err;
        this.cbCalled++;
        this.cb(err, value);
    }

    fail(value) {
        let message;
        this.cbCalled++;
        this.cb(value, message);
    }
}

var middleware = async (req, res) => {
    let cb = (err, functionResult) => {
        if (err) {
            console.error(err);

            return res.status(500).send(err.toString ? err.toString() : err);
        }

        if(isArray(functionResult) || isObject(functionResult)) {
            res.set(fnContext.headers()).status(fnContext.status()).send(JSON.stringify(functionResult));
        } else {
            res.set(fnContext.headers()).status(fnContext.status()).send(functionResult);
        }
    };

    let fnEvent = new FunctionEvent(req);
    let fnContext = new FunctionContext(cb);

    Promise.resolve(handler(fnEvent, fnContext, cb))
    .then(res => {
        if(!fnContext.cbCalled) {
            fnContext.succeed(res);
        }
    })
    .catch(e => {
        cb(e);
    });
};

app.post('/*', middleware);
app.get('/*', middleware);
app.patch('/*', middleware);
app.put('/*', middleware);
app.delete('/*', middleware);
app.options('/*', middleware);

const port = process.env.http_port || 3000;

app.listen(port, () => {
    console.log(`OpenFaaS Node.js listening on port: ${port}`)
});

let isArray = (a) => {
    return (!!a) && (a.constructor === Array);
};

let isObject = (a) => {
    return (!!a) && (a.constructor === Object);
};
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_handler_from_function_dir() {
        let content = IndexJs::new("function", "handler.js").render();
        assert!(content.contains("const handler = require('./function/handler');"));
        assert!(content.contains("const express = require('express')"));
    }

    #[test]
    fn test_custom_layout() {
        let content = IndexJs::new("fn", "index.js").render();
        assert!(content.contains("const handler = require('./fn/index');"));
    }

    #[test]
    fn test_port_defaults_to_3000() {
        let content = IndexJs::new("function", "handler.js").render();
        assert!(content.contains("const port = process.env.http_port || 3000;"));
    }
}
