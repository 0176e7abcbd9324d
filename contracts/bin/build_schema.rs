fn main() {
    odra_build::schema();
}
