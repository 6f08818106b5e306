use app_init::error::Error;
use app_init::template::{copy_template, resolve_template_dir};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn make_template(root: &Path) {
    fs::create_dir_all(root.join("src/components")).unwrap();
    fs::create_dir_all(root.join("assets")).unwrap();
    fs::write(root.join("main.js"), "import App from './src/App';\n").unwrap();
    fs::write(root.join("src/App.js"), "export default App;\n").unwrap();
    fs::write(root.join("src/components/Button.js"), "export {};\n").unwrap();
    fs::write(root.join("gitignore"), "node_modules/\n").unwrap();
}

#[test]
fn test_resolve_template_dir() {
    let path = resolve_template_dir("/work/myapp", None);
    assert_eq!(
        path,
        PathBuf::from("/work/myapp/node_modules/react-native-scripts/template")
    );

    let path = resolve_template_dir("/work/myapp", Some(PathBuf::from("/tpl")));
    assert_eq!(path, PathBuf::from("/tpl"));
}

#[tokio::test]
async fn test_copy_full_tree() {
    let template = TempDir::new().unwrap();
    let app = TempDir::new().unwrap();
    make_template(template.path());

    copy_template(template.path(), app.path()).await.unwrap();

    assert!(!dir_diff::is_different(template.path(), app.path()).unwrap());
}

#[tokio::test]
async fn test_copy_overwrites_same_path_and_keeps_others() {
    let template = TempDir::new().unwrap();
    let app = TempDir::new().unwrap();
    make_template(template.path());
    fs::write(app.path().join("main.js"), "old\n").unwrap();
    fs::write(app.path().join("package.json"), "{}\n").unwrap();

    copy_template(template.path(), app.path()).await.unwrap();

    assert_eq!(
        fs::read_to_string(app.path().join("main.js")).unwrap(),
        "import App from './src/App';\n"
    );
    assert!(app.path().join("package.json").exists());
}

#[tokio::test]
async fn test_missing_template_fails() {
    let app = TempDir::new().unwrap();

    let result = copy_template(app.path().join("no-such-template"), app.path()).await;

    assert!(matches!(result, Err(Error::TemplateCopy { .. })));
}
