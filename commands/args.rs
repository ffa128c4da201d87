use crate::octree::Point3D;

/// 参数解析工具
pub struct ArgumentParser<'a> {
    args: &'a [String],
    command_name: &'static str,
}

impl<'a> ArgumentParser<'a> {
    pub fn new(args: &'a [String], command_name: &'static str) -> Self {
        Self { args, command_name }
    }

    /// 检查参数数量
    pub fn check_arg_count(&self, expected: usize) -> Result<(), String> {
        if self.args.len() != expected {
            return Err(format!(
                "ERR wrong number of arguments for '{}' command. Expected {}, got {}",
                self.command_name,
                expected,
                self.args.len()
            ));
        }
        Ok(())
    }

    /// 获取字符串参数
    pub fn get_string(&self, index: usize, param_name: &str) -> Result<&'a str, String> {
        self.args
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| format!("ERR missing {} parameter", param_name))
    }

    /// 获取整数坐标参数
    pub fn get_i32(&self, index: usize, param_name: &str) -> Result<i32, String> {
        let value = self.get_string(index, param_name)?;
        value
            .parse::<i32>()
            .map_err(|_| format!("ERR invalid {}: expected integer, got '{}'", param_name, value))
    }

    /// 获取 id 参数
    pub fn get_u32(&self, index: usize, param_name: &str) -> Result<u32, String> {
        let value = self.get_string(index, param_name)?;
        value
            .parse::<u32>()
            .map_err(|_| format!("ERR invalid {}: expected id, got '{}'", param_name, value))
    }

    /// 从 index 开始的三个参数解析为方块坐标
    pub fn get_point(&self, index: usize) -> Result<Point3D, String> {
        Ok(Point3D::new(
            self.get_i32(index, "x")?,
            self.get_i32(index + 1, "y")?,
            self.get_i32(index + 2, "z")?,
        ))
    }

    /// 解析 LOCATE / RANGES 命令的参数
    /// 语法: LOCATE world x y z
    pub fn parse_position_args(&self) -> Result<PositionArgs, String> {
        self.check_arg_count(4)?;
        Ok(PositionArgs {
            world: self.get_string(0, "world")?.to_string(),
            point: self.get_point(1)?,
        })
    }

    /// 解析 MOVE 命令的参数
    /// 语法: MOVE entity world x y z
    pub fn parse_move_args(&self) -> Result<MoveArgs, String> {
        self.check_arg_count(5)?;
        Ok(MoveArgs {
            entity: self.get_string(0, "entity")?.to_string(),
            world: self.get_string(1, "world")?.to_string(),
            point: self.get_point(2)?,
        })
    }

    /// 解析只有一个字符串参数的命令（LEAVE, AREAS, STATS）
    pub fn parse_single_arg(&self, param_name: &str) -> Result<String, String> {
        self.check_arg_count(1)?;
        Ok(self.get_string(0, param_name)?.to_string())
    }

    /// 解析 NEXT 命令的参数
    pub fn parse_id_arg(&self, param_name: &str) -> Result<u32, String> {
        self.check_arg_count(1)?;
        self.get_u32(0, param_name)
    }
}

/// 世界中的一个方块位置
#[derive(Debug, Clone, PartialEq)]
pub struct PositionArgs {
    pub world: String,
    pub point: Point3D,
}

/// MOVE 命令参数
#[derive(Debug, Clone, PartialEq)]
pub struct MoveArgs {
    pub entity: String,
    pub world: String,
    pub point: Point3D,
}
