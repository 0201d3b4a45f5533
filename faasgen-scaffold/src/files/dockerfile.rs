//! Dockerfile emitter.

use std::path::{Path, PathBuf};

use faasgen_core::{GeneratedFile, Overwrite};

/// Multi-stage Dockerfile wrapping the bootstrap script with the
/// openfaas/of-watchdog process supervisor.
pub struct Dockerfile {
    func_dir: String,
    watchdog_tag: String,
}

impl Dockerfile {
    pub fn new(func_dir: impl Into<String>, watchdog_tag: impl Into<String>) -> Self {
        Self {
            func_dir: func_dir.into(),
            watchdog_tag: watchdog_tag.into(),
        }
    }
}

impl GeneratedFile for Dockerfile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("Dockerfile")
    }

    fn overwrite(&self) -> Overwrite {
        Overwrite::IfMissing
    }

    fn render(&self) -> String {
        format!(
            r#"FROM --platform=${{TARGETPLATFORM:-linux/amd64}} openfaas/of-watchdog:{tag} as watchdog
FROM --platform=${{TARGETPLATFORM:-linux/amd64}} node:12-alpine as ship

ARG TARGETPLATFORM
ARG BUILDPLATFORM

COPY --from=watchdog /fwatchdog /usr/bin/fwatchdog
RUN chmod +x /usr/bin/fwatchdog

RUN apk --no-cache add curl ca-certificates \
    && addgroup -S app && adduser -S -g app app

WORKDIR /root/

# Turn down the verbosity to default level.
ENV NPM_CONFIG_LOGLEVEL warn

RUN mkdir -p /home/app

# Wrapper/boot-strapper
WORKDIR /home/app
COPY package.json ./

# This ordering means the npm installation is cached for the outer function handler.
RUN npm i

# Copy outer function handler
COPY index.js ./

# COPY function node packages and install, adding this as a separate
# entry allows caching of npm install

WORKDIR /home/app/{dir}

COPY {dir}/*.json ./

RUN npm i || :

# COPY function files and folders
COPY {dir}/ ./

# Run any tests that may be available
RUN npm test

# Set correct permissions to use non root user
WORKDIR /home/app/

# chmod for tmp is for a buildkit issue (@alexellis)
RUN chown app:app -R /home/app \
    && chmod 777 /tmp

USER app

ENV cgi_headers="true"
ENV fprocess="node index.js"
ENV mode="http"
ENV upstream_url="http://127.0.0.1:3000"

ENV exec_timeout="10s"
ENV write_timeout="15s"
ENV read_timeout="15s"

HEALTHCHECK --interval=3s CMD [ -e /tmp/.lock ] || exit 1

CMD ["fwatchdog"]
"#,
            tag = self.watchdog_tag,
            dir = self.func_dir
        )
    }
}
